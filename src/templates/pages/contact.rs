use crate::templates::components::{lead_form, status_badge, whatsapp_button};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ContactCardVm {
    pub name: String,
    pub role: String,
    pub hours: String,
    pub is_open: bool,
    pub status_text: String,
    pub whatsapp: Option<String>,
}

pub struct ContactVm {
    pub contacts: Vec<ContactCardVm>,
    pub sent: bool,
}

pub fn contact_page(vm: &ContactVm) -> Markup {
    desktop_layout(
        "Contact",
        false,
        html! {
            main class="container" {
                h1 { "Contact" }

                @if vm.sent {
                    div class="notice success" id="lead-sent" {
                        "Thanks! We received your message and will get back to you shortly."
                    }
                }

                div class="grid" {
                    @for contact in &vm.contacts {
                        section class="card contact" {
                            h3 { (contact.name) }
                            p class="muted" { (contact.role) }
                            p { "Monday to Friday, " (contact.hours) }
                            (status_badge(contact.is_open, &contact.status_text))
                            (whatsapp_button(contact.whatsapp.as_deref(), "WhatsApp"))
                        }
                    }
                }

                section class="card" {
                    h3 { "Write to us" }
                    (lead_form())
                }
            }
        },
    )
}
