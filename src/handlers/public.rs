// src/handlers/public.rs
use crate::config::ContactConfig;
use crate::db::leads::insert_lead;
use crate::domain::availability::{status_now, ContactWindow, LabelSet};
use crate::domain::chat_link::whatsapp_link;
use crate::domain::lead::NewLead;
use crate::domain::rates::{calculate, RateInput};
use crate::domain::rooms::{self as room_income, PRICE_PER_ROOM};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect, ResultResp};
use crate::router::Params;
use crate::state::AppState;
use crate::templates::pages::{self, ContactCardVm, ContactVm, DiscountsVm, HomeVm, RoomCardVm, WidgetVm};

pub fn home(query: &Params) -> ResultResp {
    let rooms = match query.get("rooms") {
        Some(raw) => room_income::clamp_to_stepper(room_income::parse_room_count(raw)?),
        None => room_income::MIN_STEPPER_ROOMS,
    };

    html_response(pages::home_page(&HomeVm {
        rooms,
        price_per_room: PRICE_PER_ROOM,
        monthly_income: room_income::monthly_income(rooms),
    }))
}

fn rate_input(query: &Params) -> Result<RateInput, ServerError> {
    let properties = query.get("properties").map(String::as_str).unwrap_or("1");
    let referrals = query.get("referrals").map(String::as_str).unwrap_or("0");
    Ok(RateInput::parse(properties, referrals)?)
}

pub fn discounts(query: &Params) -> ResultResp {
    let input = rate_input(query)?;

    html_response(pages::discounts_page(&DiscountsVm {
        properties: input.property_count(),
        referrals: input.referral_count(),
        result: calculate(&input),
    }))
}

pub fn api_rate(query: &Params) -> ResultResp {
    let input = rate_input(query)?;
    json_response(&calculate(&input))
}

pub fn rooms(state: &AppState) -> ResultResp {
    let cfg = &state.config;
    let cards: Vec<RoomCardVm> = cfg
        .rooms
        .iter()
        .map(|room| {
            let message = format!(
                "Hi! I'm interested in {} ({}).",
                room.name, room.neighbourhood
            );
            RoomCardVm {
                name: room.name.clone(),
                neighbourhood: room.neighbourhood.clone(),
                size_m2: room.size_m2,
                available: room.available,
                price: PRICE_PER_ROOM,
                whatsapp: chat_link(&cfg.chat_phone, &message),
            }
        })
        .collect();

    html_response(pages::rooms_page(&cards))
}

pub fn contact(state: &AppState, query: &Params) -> ResultResp {
    let cfg = &state.config;
    let mut contacts = Vec::with_capacity(cfg.contacts.len());

    for contact in &cfg.contacts {
        let window = contact_window(contact)?;
        let (is_open, status_text) = availability(state, &window, &cfg.labels.contact);

        contacts.push(ContactCardVm {
            name: contact.name.clone(),
            role: contact.role.clone(),
            hours: format!(
                "{:02}:00 – {:02}:00",
                window.start_hour(),
                window.end_hour()
            ),
            is_open,
            status_text,
            whatsapp: chat_link(&contact.phone, &cfg.chat_greeting),
        });
    }

    let sent = query.get("sent").map(String::as_str) == Some("1");
    html_response(pages::contact_page(&ContactVm { contacts, sent }))
}

pub fn submit_lead(state: &AppState, form: &Params) -> ResultResp {
    let lead = NewLead::from_form(form)?;
    let now = state.now_unix();

    let lead_id = state
        .db
        .with_conn(|conn| insert_lead(conn, &lead, now))?;

    tracing::info!(lead_id, kind = %lead.kind, "lead received");
    redirect(303, "/contact?sent=1")
}

/// Fragment for the floating widget; status follows the primary (first) contact.
pub fn widget(state: &AppState) -> ResultResp {
    let cfg = &state.config;

    let (is_open, status_text) = match cfg.contacts.first() {
        Some(primary) => {
            let window = contact_window(primary)?;
            availability(state, &window, &cfg.labels.widget)
        }
        None => (false, String::new()),
    };

    html_response(pages::widget_fragment(&WidgetVm {
        is_open,
        status_text,
        whatsapp: chat_link(&cfg.chat_phone, &cfg.chat_greeting),
    }))
}

fn contact_window(contact: &ContactConfig) -> Result<ContactWindow, ServerError> {
    contact.window().map_err(|e| {
        tracing::error!(contact = %contact.name, error = %e, "contact hours misconfigured");
        ServerError::InternalError
    })
}

fn availability(state: &AppState, window: &ContactWindow, labels: &LabelSet) -> (bool, String) {
    let status = status_now(window, state.clock.as_ref(), state.tz);
    (status.is_open, status.label_text(labels, window))
}

fn chat_link(phone: &str, message: &str) -> Option<String> {
    match whatsapp_link(phone, message) {
        Ok(link) => Some(link),
        Err(e) => {
            tracing::warn!(phone, error = %e, "cannot build chat link");
            None
        }
    }
}
