use crate::db::leads::list_leads;
use crate::domain::lead::{LeadKind, LeadStatus};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, madrid, post_form, test_state, test_state_at};

#[test]
fn contact_page_shows_open_status_during_office_hours() {
    let state = test_state();

    let resp = handle(get("/contact"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Available now"));
    assert!(!body.contains("Closed now"));
    assert!(body.contains("09:00 – 14:00"));
    assert!(body.contains("https://api.whatsapp.com/send?phone=34600000000"));
    assert!(!body.contains("lead-sent"));
}

#[test]
fn contact_page_is_closed_on_saturday_morning() {
    // Inside the hour window, but the weekend wins.
    let state = test_state_at(madrid(2024, 5, 18, 11, 0));

    let body = body_string(handle(get("/contact"), &state).unwrap());
    assert!(body.contains("Closed for the weekend"));
    assert!(!body.contains("Available now"));
}

#[test]
fn end_hour_is_exclusive() {
    // 14:00 closes the office but tenant support is still open.
    let state = test_state_at(madrid(2024, 5, 15, 14, 0));

    let body = body_string(handle(get("/contact"), &state).unwrap());
    assert!(body.contains("Closed now"));
    assert!(body.contains("Available now"));
}

#[test]
fn widget_uses_its_own_labels() {
    let state = test_state();
    let body = body_string(handle(get("/widget"), &state).unwrap());
    assert!(body.contains("Online"));
    assert!(body.contains("Chat with us"));

    let evening = test_state_at(madrid(2024, 5, 15, 20, 0));
    let body = body_string(handle(get("/widget"), &evening).unwrap());
    assert!(body.contains("Reopens at 09:00"));

    let sunday = test_state_at(madrid(2024, 5, 19, 10, 0));
    let body = body_string(handle(get("/widget"), &sunday).unwrap());
    assert!(body.contains("Back on Monday"));
}

#[test]
fn layout_polls_widget() {
    let state = test_state();
    let body = body_string(handle(get("/rooms"), &state).unwrap());
    assert!(body.contains(r#"hx-get="/widget""#));
    assert!(body.contains("every 60s"));
}

#[test]
fn submitting_lead_stores_and_redirects() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/contact",
            "kind=owner&name=Ana&email=Ana%40Example.com+&phone=%2B34+600&message=I+have+a+flat",
        ),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/contact?sent=1"
    );

    let stored = state
        .db
        .with_conn(|conn| list_leads(conn, None))
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].kind, LeadKind::Owner);
    assert_eq!(stored[0].email, "ana@example.com");
    assert_eq!(stored[0].phone.as_deref(), Some("+34 600"));
    assert_eq!(stored[0].status, LeadStatus::New);
    assert_eq!(stored[0].created_at, state.now_unix());

    let body = body_string(handle(get("/contact?sent=1"), &state).unwrap());
    assert!(body.contains("lead-sent"));
}

#[test]
fn invalid_lead_is_rejected() {
    let state = test_state();

    let result = handle(
        post_form("/contact", "kind=tenant&name=Ana&email=ana%40example.com"),
        &state,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = handle(post_form("/contact", "kind=buyer&name=&email=x%40y.z"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let stored = state
        .db
        .with_conn(|conn| list_leads(conn, None))
        .unwrap();
    assert!(stored.is_empty());
}

#[test]
fn oversized_lead_form_is_rejected_whole() {
    let state = test_state();
    let form = format!(
        "kind=owner&name=Ana&message={}&email=ana%40example.com",
        "x".repeat(70 * 1024)
    );

    let err = handle(post_form("/contact", &form), &state).unwrap_err();
    assert_eq!(err.to_string(), "Bad Request: request body too large");

    let stored = state
        .db
        .with_conn(|conn| list_leads(conn, None))
        .unwrap();
    assert!(stored.is_empty());
}

#[test]
fn lead_form_at_limit_is_accepted() {
    let state = test_state();
    let prefix = "kind=owner&name=Ana&email=ana%40example.com&message=";
    let form = format!("{prefix}{}", "x".repeat(64 * 1024 - prefix.len()));
    assert_eq!(form.len(), 64 * 1024);

    let resp = handle(post_form("/contact", &form), &state).unwrap();
    assert_eq!(resp.status(), 303);
}
