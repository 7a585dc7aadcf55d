use crate::templates::components::{status_badge, whatsapp_button};
use maud::{html, Markup};

pub struct WidgetVm {
    pub is_open: bool,
    pub status_text: String,
    pub whatsapp: Option<String>,
}

/// Partial swapped into the floating widget by htmx.
pub fn widget_fragment(vm: &WidgetVm) -> Markup {
    html! {
        div class="widget-body" {
            (status_badge(vm.is_open, &vm.status_text))
            (whatsapp_button(vm.whatsapp.as_deref(), "Chat with us"))
        }
    }
}
