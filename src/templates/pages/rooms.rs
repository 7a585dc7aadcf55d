use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct RoomCardVm {
    pub name: String,
    pub neighbourhood: String,
    pub size_m2: u32,
    pub available: bool,
    pub price: u64,
    pub whatsapp: Option<String>,
}

pub fn rooms_page(rooms: &[RoomCardVm]) -> Markup {
    desktop_layout(
        "Rooms",
        false,
        html! {
            main class="container" {
                h1 { "Rooms for rent" }

                @if rooms.is_empty() {
                    p { "No rooms listed right now. Check back soon." }
                }

                div class="grid" {
                    @for room in rooms {
                        article class="card room" {
                            h3 { (room.name) }
                            p { (room.neighbourhood) " · " (room.size_m2) " m²" }
                            p { strong { (room.price) " €/month" } }
                            @if room.available {
                                span class="status open" { "Available" }
                                @if let Some(link) = &room.whatsapp {
                                    a class="btn whatsapp" href=(link) target="_blank" rel="noopener" { "Ask about this room" }
                                }
                            } @else {
                                span class="status closed" { "Rented" }
                            }
                        }
                    }
                }
            }
        },
    )
}
