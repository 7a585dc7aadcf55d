// templates/pages/home.rs

use crate::domain::rooms::{MAX_STEPPER_ROOMS, MIN_STEPPER_ROOMS};
use crate::templates::{
    components::{button, card},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm {
    pub rooms: u32,
    pub price_per_room: u64,
    pub monthly_income: u64,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        false,
        html! {
            main class="container" {
                h1 { "We manage your rental so you don't have to" }
                p class="lead" {
                    "Tenant search, contracts, incidents and monthly payouts for flats and rooms."
                }

                section class="services" {
                    (card("Full management", html! {
                        p { "From listing to check-out. One monthly fee, no surprises." }
                    }))
                    (card("Rooms", html! {
                        p { "We split and furnish flats for room rental and fill every room." }
                    }))
                    (card("Investors", html! {
                        p { "Lower rates the more properties you bring. "
                            a href="/discounts" { "See discounts" } }
                    }))
                }

                (room_estimator(vm))

                a href="/contact" { (button("Talk to us")) }
            }
        },
    )
}

fn room_estimator(vm: &HomeVm) -> Markup {
    html! {
        section class="card" id="room-estimator" {
            h3 { "How much could your flat earn by rooms?" }
            div class="stepper" {
                @if vm.rooms > MIN_STEPPER_ROOMS {
                    a class="btn" href=(format!("/?rooms={}", vm.rooms - 1)) { "−" }
                }
                strong { (vm.rooms) " rooms" }
                @if vm.rooms < MAX_STEPPER_ROOMS {
                    a class="btn" href=(format!("/?rooms={}", vm.rooms + 1)) { "+" }
                }
            }
            p {
                "Estimated income: "
                strong id="monthly-income" { (vm.monthly_income) " €/month" }
            }
            p class="microcopy" {
                "Based on an average of " (vm.price_per_room) " € per room. Real prices depend on the area."
            }
        }
    }
}
