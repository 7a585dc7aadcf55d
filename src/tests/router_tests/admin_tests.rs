use crate::db::{invoices, leads};
use crate::domain::lead::{LeadKind, LeadStatus, NewLead};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    as_admin, body_string, get, madrid, post_form, test_state, test_state_at, EchoGenerator,
    FailingGenerator, ADMIN_KEY,
};
use std::sync::Arc;

fn seed_lead(state: &crate::state::AppState, kind: LeadKind, name: &str) -> i64 {
    let lead = NewLead {
        kind,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        message: "Call me".to_string(),
    };
    state
        .db
        .with_conn(|conn| leads::insert_lead(conn, &lead, state.now_unix()))
        .unwrap()
}

#[test]
fn admin_routes_require_key() {
    let state = test_state();

    let result = handle(get("/admin/leads"), &state);
    assert!(matches!(result, Err(ServerError::Unauthorized(_))));

    let mut req = get("/admin/leads");
    req.headers_mut()
        .insert("x-admin-key", "wrong".parse().unwrap());
    let err = handle(req, &state).unwrap_err();
    assert_eq!(err.status(), 401);
}

#[test]
fn admin_key_cookie_is_accepted() {
    let state = test_state();

    let mut req = get("/admin/leads");
    req.headers_mut().insert(
        "cookie",
        format!("theme=dark; admin_key={ADMIN_KEY}").parse().unwrap(),
    );
    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
}

#[test]
fn admin_is_closed_without_configured_key() {
    let mut state = test_state();
    let mut config = (*state.config).clone();
    config.admin_key = None;
    state.config = Arc::new(config);

    let err = handle(as_admin(get("/admin/leads")), &state).unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized: admin access is not configured");
}

#[test]
fn leads_page_lists_and_filters() {
    let state = test_state();
    seed_lead(&state, LeadKind::Owner, "Olga");
    seed_lead(&state, LeadKind::Buyer, "Bruno");

    let body = body_string(handle(as_admin(get("/admin/leads")), &state).unwrap());
    assert!(body.contains("Olga"));
    assert!(body.contains("Bruno"));

    let body = body_string(handle(as_admin(get("/admin/leads?kind=owner")), &state).unwrap());
    assert!(body.contains("Olga"));
    assert!(!body.contains("Bruno"));
    assert!(body.contains("/admin/leads/export?kind=owner"));

    let err = handle(as_admin(get("/admin/leads?kind=landlord")), &state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn lead_status_update_redirects() {
    let state = test_state();
    let id = seed_lead(&state, LeadKind::Seller, "Sara");

    let resp = handle(
        as_admin(post_form(&format!("/admin/leads/{id}/status"), "status=qualified")),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/leads");

    let stored = state
        .db
        .with_conn(|conn| leads::list_leads(conn, None))
        .unwrap();
    assert_eq!(stored[0].status, LeadStatus::Qualified);

    let missing = handle(
        as_admin(post_form("/admin/leads/9999/status", "status=closed")),
        &state,
    );
    assert!(matches!(missing, Err(ServerError::NotFound)));

    let bad = handle(
        as_admin(post_form(&format!("/admin/leads/{id}/status"), "status=won")),
        &state,
    );
    assert!(matches!(bad, Err(ServerError::BadRequest(_))));
}

#[test]
fn leads_export_is_xlsx_attachment() {
    let state = test_state();
    seed_lead(&state, LeadKind::Owner, "Olga");

    let resp = handle(as_admin(get("/admin/leads/export?kind=owner")), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"leads_owner_2024-05-15.xlsx\""
    );
}

#[test]
fn invoice_add_and_pay_flow() {
    let state = test_state();

    let resp = handle(
        as_admin(post_form(
            "/admin/invoices",
            "worker=Luis&concept=Plumbing&amount=120%2C50&issued_on=2024-05-10",
        )),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/invoices");

    let body = body_string(handle(as_admin(get("/admin/invoices")), &state).unwrap());
    assert!(body.contains("Luis"));
    assert!(body.contains(r#"<strong id="unpaid-total">120.50 €</strong>"#));

    let id = state
        .db
        .with_conn(|conn| invoices::list_invoices(conn))
        .unwrap()[0]
        .id;

    let resp = handle(
        as_admin(post_form(&format!("/admin/invoices/{id}/paid"), "")),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let body = body_string(handle(as_admin(get("/admin/invoices")), &state).unwrap());
    assert!(body.contains(r#"<strong id="unpaid-total">0.00 €</strong>"#));
    assert!(!body.contains("Mark paid"));
}

#[test]
fn invalid_invoice_is_rejected() {
    let state = test_state();

    let err = handle(
        as_admin(post_form(
            "/admin/invoices",
            "worker=Luis&amount=-3&issued_on=2024-05-10",
        )),
        &state,
    )
    .unwrap_err();
    assert_eq!(err.status(), 400);

    let err = handle(
        as_admin(post_form(
            "/admin/invoices",
            "worker=Luis&amount=3&issued_on=10%2F05%2F2024",
        )),
        &state,
    )
    .unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn copy_page_disabled_without_generator() {
    let state = test_state();

    let body = body_string(handle(as_admin(get("/admin/copy")), &state).unwrap());
    assert!(body.contains("disabled: no API key"));
    assert!(!body.contains(r#"action="/admin/copy""#));
}

#[test]
fn copy_draft_uses_generator() {
    let state = test_state().with_copywriter(Arc::new(EchoGenerator));

    let body = body_string(
        handle(
            as_admin(post_form("/admin/copy", "topic=room+rentals+in+Ruzafa&tone=")),
            &state,
        )
        .unwrap(),
    );
    assert!(body.contains(r#"id="draft""#));
    assert!(body.contains("DRAFT: "));
    assert!(body.contains("Topic: room rentals in Ruzafa."));
    assert!(body.contains("Tone: friendly and professional."));

    let body = body_string(handle(as_admin(post_form("/admin/copy", "topic=")), &state).unwrap());
    assert!(body.contains("topic is required"));
    assert!(!body.contains(r#"id="draft""#));
}

#[test]
fn copy_generator_failure_is_shown_inline() {
    let state = test_state().with_copywriter(Arc::new(FailingGenerator));

    let resp = handle(
        as_admin(post_form("/admin/copy", "topic=investors")),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("The text generator is not available right now."));
    assert!(!body.contains("overloaded"));
}

#[test]
fn unknown_admin_route_is_not_found() {
    let state = test_state();
    let result = handle(as_admin(get("/admin/nothing")), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn lead_times_use_business_zone() {
    // Just after midnight in Madrid, still the previous day in UTC.
    let received = madrid(2024, 5, 16, 0, 30);
    let state = test_state_at(received);
    seed_lead(&state, LeadKind::Owner, "Olga");

    let body = body_string(handle(as_admin(get("/admin/leads")), &state).unwrap());
    assert!(body.contains("2024-05-16 00:30"));
    assert!(!body.contains("2024-05-15 22:30"));

    let resp = handle(as_admin(get("/admin/leads/export")), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"leads_2024-05-16.xlsx\""
    );
}
