use crate::clock::FixedClock;
use crate::config::AppConfig;
use crate::copywriter::{CopyError, TextGenerator};
use crate::db::connection::{init_db, Database};
use crate::state::AppState;
use astra::{Body, Response};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Madrid;
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const ADMIN_KEY: &str = "test-admin-key";

/// Fresh temp-file DB with the production schema.
pub fn init_test_db() -> Database {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "rental_site_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Local time in the business zone, as UTC.
pub fn madrid(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Madrid
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

/// Wednesday 2024-05-15, 10:30 in Madrid.
pub fn wednesday_morning() -> DateTime<Utc> {
    madrid(2024, 5, 15, 10, 30)
}

pub fn test_state_at(now: DateTime<Utc>) -> AppState {
    let db = init_test_db();
    let config = AppConfig {
        database_path: db.path().to_string(),
        admin_key: Some(ADMIN_KEY.to_string()),
        ..AppConfig::default()
    };

    AppState::from_config(config)
        .expect("default config is valid")
        .with_clock(Arc::new(FixedClock::new(now)))
}

pub fn test_state() -> AppState {
    test_state_at(wednesday_morning())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn as_admin(mut req: Request<Body>) -> Request<Body> {
    req.headers_mut()
        .insert("x-admin-key", ADMIN_KEY.parse().unwrap());
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Echoes the prompt back so tests can see what was sent.
pub struct EchoGenerator;

impl TextGenerator for EchoGenerator {
    fn generate(&self, prompt: &str) -> Result<String, CopyError> {
        Ok(format!("DRAFT: {prompt}"))
    }
}

pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, CopyError> {
        Err(CopyError::ApiError {
            status: 503,
            body: "overloaded".into(),
        })
    }
}
