// src/domain/rooms.rs

use crate::domain::parse_integer;
use crate::errors::ValidationError;

/// Average monthly price of a managed room.
pub const PRICE_PER_ROOM: u64 = 270;

/// Bounds of the room stepper on the home page. The estimator itself accepts any count.
pub const MIN_STEPPER_ROOMS: u32 = 2;
pub const MAX_STEPPER_ROOMS: u32 = 10;

pub fn monthly_income(room_count: u32) -> u64 {
    u64::from(room_count) * PRICE_PER_ROOM
}

/// Parses a room count; negative or fractional values are rejected.
pub fn parse_room_count(raw: &str) -> Result<u32, ValidationError> {
    let value = parse_integer("rooms", raw)?;
    if value < 0 {
        return Err(ValidationError::BelowMinimum {
            field: "rooms",
            min: 0,
            value,
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::Invalid {
        field: "rooms",
        reason: format!("{value} is too large"),
    })
}

pub fn clamp_to_stepper(room_count: u32) -> u32 {
    room_count.clamp(MIN_STEPPER_ROOMS, MAX_STEPPER_ROOMS)
}
