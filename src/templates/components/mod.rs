use maud::{html, Markup};

pub mod error;
pub mod lead_form;

pub use error::html_error_response;
pub use lead_form::lead_form;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Green "chat with us" link. Falls back to plain text when the link could not be built.
pub fn whatsapp_button(link: Option<&str>, label: &str) -> Markup {
    html! {
        @match link {
            Some(href) => a class="btn whatsapp" href=(href) target="_blank" rel="noopener" { (label) },
            None => span class="muted" { "Chat unavailable" },
        }
    }
}

/// Green dot when open, grey otherwise.
pub fn status_badge(is_open: bool, text: &str) -> Markup {
    html! {
        span class=(if is_open { "status open" } else { "status closed" }) {
            span class="dot" aria-hidden="true" {}
            (text)
        }
    }
}
