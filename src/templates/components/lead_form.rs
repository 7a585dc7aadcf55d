use crate::domain::lead::LeadKind;
use maud::{html, Markup};

pub fn lead_form() -> Markup {
    html! {
        div class="lead-form-wrapper" {
            form method="post" action="/contact" class="lead-form" {
                label for="kind" { "I am" }
                select id="kind" name="kind" required {
                    @for kind in LeadKind::ALL {
                        option value=(kind.as_str()) { (kind_label(kind)) }
                    }
                }

                label for="name" { "Name" }
                input type="text" id="name" name="name" autocomplete="name" required;

                label for="email" { "Email address" }
                input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="you@domain.com"
                    autocomplete="email"
                    required;

                label for="phone" { "Phone (optional)" }
                input type="tel" id="phone" name="phone" autocomplete="tel";

                label for="message" { "Message" }
                textarea id="message" name="message" rows="4" maxlength="2000" {}

                button type="submit" class="primary" {
                    span class="btn-text" { "Send" }
                }

                p class="microcopy" {
                    "We answer every message within one working day."
                }
            }
        }
    }
}

pub fn kind_label(kind: LeadKind) -> &'static str {
    match kind {
        LeadKind::Owner => "An owner looking for management",
        LeadKind::Buyer => "Looking to buy",
        LeadKind::Seller => "Looking to sell",
    }
}
