use crate::errors::ServerError;
use crate::handlers::{admin, public};
use crate::responses::ResultResp;
use crate::state::AppState;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Form bodies larger than this are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub type Params = HashMap<String, String>;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = parse_query(&req);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => public::home(&query),
        ("GET", ["discounts"]) => public::discounts(&query),
        ("GET", ["api", "rate"]) => public::api_rate(&query),
        ("GET", ["rooms"]) => public::rooms(state),
        ("GET", ["contact"]) => public::contact(state, &query),
        ("POST", ["contact"]) => {
            let form = read_form(&mut req)?;
            public::submit_lead(state, &form)
        }
        ("GET", ["widget"]) => public::widget(state),

        (_, ["admin", rest @ ..]) => {
            require_admin(&req, state)?;
            admin_routes(method.as_str(), rest, &mut req, state, &query)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn admin_routes(
    method: &str,
    rest: &[&str],
    req: &mut Request,
    state: &AppState,
    query: &Params,
) -> ResultResp {
    match (method, rest) {
        ("GET", ["leads"]) => admin::leads(state, query),
        ("GET", ["leads", "export"]) => admin::export_leads(state, query),
        ("POST", ["leads", id, "status"]) => {
            let id = parse_id(id)?;
            let form = read_form(req)?;
            admin::set_lead_status(state, id, &form)
        }
        ("GET", ["invoices"]) => admin::invoices(state),
        ("POST", ["invoices"]) => {
            let form = read_form(req)?;
            admin::add_invoice(state, &form)
        }
        ("POST", ["invoices", id, "paid"]) => admin::mark_paid(state, parse_id(id)?),
        ("GET", ["copy"]) => admin::copy_form(state),
        ("POST", ["copy"]) => {
            let form = read_form(req)?;
            admin::draft_copy(state, &form)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Admin pages need the configured key, as `x-admin-key` header or `admin_key` cookie.
fn require_admin(req: &Request, state: &AppState) -> Result<(), ServerError> {
    let Some(expected) = state.config.admin_key.as_deref().filter(|k| !k.is_empty()) else {
        return Err(ServerError::Unauthorized(
            "admin access is not configured".into(),
        ));
    };

    let provided = req
        .headers()
        .get("x-admin-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| cookie_value(req, "admin_key"));

    match provided {
        Some(key) if key == expected => Ok(()),
        _ => Err(ServerError::Unauthorized("admin key required".into())),
    }
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| ServerError::NotFound)
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
