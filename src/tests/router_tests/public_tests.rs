use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn home_shows_room_estimate() {
    let state = test_state();

    let resp = handle(get("/?rooms=3"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("810 €/month"), "3 rooms at 270");
    assert!(body.contains("/?rooms=2"));
    assert!(body.contains("/?rooms=4"));
}

#[test]
fn home_clamps_rooms_to_stepper_and_rejects_negatives() {
    let state = test_state();

    let body = body_string(handle(get("/?rooms=50"), &state).unwrap());
    assert!(body.contains("2700 €/month"));

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("540 €/month"), "defaults to two rooms");

    assert!(matches!(
        handle(get("/?rooms=-1"), &state),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn discounts_page_renders_final_rate() {
    let state = test_state();

    let resp = handle(get("/discounts?properties=3&referrals=3"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("11.5%"));
    assert!(body.contains("Rough projection"));
}

#[test]
fn discounts_rejects_zero_properties() {
    let state = test_state();

    let err = handle(get("/discounts?properties=0&referrals=1"), &state).unwrap_err();
    assert_eq!(err.status(), 400);
    assert!(err.to_string().contains("property_count"));

    let err = handle(get("/discounts?properties=2.5"), &state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn rate_api_returns_json() {
    let state = test_state();

    let resp = handle(get("/api/rate?properties=1&referrals=20"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["final_rate_percent"], 10.0);
    assert_eq!(json["volume_rate_percent"], 15.0);
    assert_eq!(json["referral_discount_percent"], 10.0);
    assert_eq!(json["savings_percent"], 5.0);
    assert_eq!(json["yearly_savings"], 900.0);
}

#[test]
fn rooms_catalog_lists_configured_rooms() {
    let state = test_state();

    let body = body_string(handle(get("/rooms"), &state).unwrap());
    for room in &state.config.rooms {
        assert!(body.contains(&room.name));
    }
    assert!(body.contains("270 €/month"));
    assert!(body.contains("https://api.whatsapp.com/send?phone="));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    assert!(matches!(
        handle(get("/blog/missing"), &state),
        Err(ServerError::NotFound)
    ));
}
