// src/domain/availability.rs

use crate::clock::Clock;
use crate::errors::ValidationError;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;

/// Daily working window `[start_hour, end_hour)`.
///
/// Callers are expected to configure `start_hour < end_hour`; an inverted
/// window simply never reports open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactWindow {
    start_hour: u8,
    end_hour: u8,
}

impl ContactWindow {
    pub fn new(start_hour: i64, end_hour: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            start_hour: check_hour("start_hour", start_hour)?,
            end_hour: check_hour("end_hour", end_hour)?,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }
}

fn check_hour(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    match u8::try_from(value) {
        Ok(hour) if hour < 24 => Ok(hour),
        _ => Err(ValidationError::HourOutOfRange { field, value }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    AvailableNow,
    ClosedNow,
    ClosedWeekend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub is_open: bool,
    pub label: Availability,
}

impl AvailabilityResult {
    pub fn label_text(&self, labels: &LabelSet, window: &ContactWindow) -> String {
        match self.label {
            Availability::AvailableNow => labels.open.clone(),
            Availability::ClosedWeekend => labels.weekend.clone(),
            Availability::ClosedNow => labels
                .closed
                .replace("{start}", &format!("{:02}", window.start_hour)),
        }
    }
}

/// Label texts for one call site. `closed` may contain `{start}`, which is
/// replaced by the zero-padded opening hour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelSet {
    pub open: String,
    pub closed: String,
    pub weekend: String,
}

impl LabelSet {
    pub fn contact_page() -> Self {
        Self {
            open: "Available now".to_string(),
            closed: "Closed now".to_string(),
            weekend: "Closed for the weekend".to_string(),
        }
    }

    pub fn floating_widget() -> Self {
        Self {
            open: "Online".to_string(),
            closed: "Reopens at {start}:00".to_string(),
            weekend: "Back on Monday".to_string(),
        }
    }
}

/// Weekends are closed whatever the window says; otherwise the window is half-open.
pub fn evaluate(window: &ContactWindow, weekday: Weekday, hour: u32) -> AvailabilityResult {
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return AvailabilityResult {
            is_open: false,
            label: Availability::ClosedWeekend,
        };
    }

    if u32::from(window.start_hour) <= hour && hour < u32::from(window.end_hour) {
        AvailabilityResult {
            is_open: true,
            label: Availability::AvailableNow,
        }
    } else {
        AvailabilityResult {
            is_open: false,
            label: Availability::ClosedNow,
        }
    }
}

pub fn evaluate_at<T: TimeZone>(window: &ContactWindow, at: &DateTime<T>) -> AvailabilityResult {
    evaluate(window, at.weekday(), at.hour())
}

/// Status in the business time zone, not the viewer's.
pub fn status_now(window: &ContactWindow, clock: &dyn Clock, tz: Tz) -> AvailabilityResult {
    evaluate_at(window, &clock.now().with_timezone(&tz))
}
