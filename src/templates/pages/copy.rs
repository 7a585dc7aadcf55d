use crate::templates::desktop_layout;
use maud::{html, Markup};

#[derive(Default)]
pub struct CopyVm {
    pub enabled: bool,
    pub topic: String,
    pub tone: String,
    pub draft: Option<String>,
    pub error: Option<String>,
}

pub fn copy_page(vm: &CopyVm) -> Markup {
    desktop_layout(
        "Marketing copy",
        true,
        html! {
            main class="container" {
                h1 { "Draft marketing copy" }

                @if !vm.enabled {
                    p class="notice" { "Copy drafting is disabled: no API key is configured." }
                } @else {
                    form action="/admin/copy" method="post" class="card" {
                        label for="topic" { "Topic" }
                        input type="text" id="topic" name="topic" value=(vm.topic) required;
                        label for="tone" { "Tone" }
                        input type="text" id="tone" name="tone" value=(vm.tone) placeholder="friendly and professional";
                        button type="submit" class="primary" { "Draft" }
                    }
                }

                @if let Some(err) = &vm.error {
                    p class="notice error" { (err) }
                }

                @if let Some(draft) = &vm.draft {
                    section class="card" id="draft" {
                        h3 { "Draft" }
                        textarea rows="10" style="width: 100%;" { (draft) }
                    }
                }
            }
        },
    )
}
