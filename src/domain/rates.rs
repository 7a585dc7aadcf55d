// src/domain/rates.rs

use crate::domain::parse_integer;
use crate::errors::ValidationError;
use serde::Serialize;

/// Fee charged to a single-property owner with no referrals.
pub const BASE_RATE_PERCENT: f64 = 15.0;
/// The pricing model never goes below this, whatever the discounts add up to.
pub const FLOOR_RATE_PERCENT: f64 = 10.0;
/// Discount granted per referred investor.
pub const REFERRAL_DISCOUNT_STEP: f64 = 0.5;
/// Assumed average monthly rent used by the yearly savings projection.
pub const ASSUMED_MONTHLY_RENT: f64 = 1500.0;

/// Validated calculator input: at least one property, zero or more referrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateInput {
    property_count: u32,
    referral_count: u32,
}

impl RateInput {
    pub fn new(property_count: i64, referral_count: i64) -> Result<Self, ValidationError> {
        if property_count < 1 {
            return Err(ValidationError::BelowMinimum {
                field: "property_count",
                min: 1,
                value: property_count,
            });
        }
        if referral_count < 0 {
            return Err(ValidationError::BelowMinimum {
                field: "referral_count",
                min: 0,
                value: referral_count,
            });
        }

        let property_count =
            u32::try_from(property_count).map_err(|_| ValidationError::Invalid {
                field: "property_count",
                reason: format!("{property_count} is too large"),
            })?;
        let referral_count =
            u32::try_from(referral_count).map_err(|_| ValidationError::Invalid {
                field: "referral_count",
                reason: format!("{referral_count} is too large"),
            })?;

        Ok(Self {
            property_count,
            referral_count,
        })
    }

    /// Builds the input from raw query-string values.
    pub fn parse(properties: &str, referrals: &str) -> Result<Self, ValidationError> {
        let property_count = parse_integer("property_count", properties)?;
        let referral_count = parse_integer("referral_count", referrals)?;
        Self::new(property_count, referral_count)
    }

    pub fn property_count(&self) -> u32 {
        self.property_count
    }

    pub fn referral_count(&self) -> u32 {
        self.referral_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateResult {
    pub base_rate_percent: f64,
    pub volume_rate_percent: f64,
    pub referral_discount_percent: f64,
    pub final_rate_percent: f64,
    pub floor_rate_percent: f64,
    pub savings_percent: f64,
    /// Rough projection only: assumes every property rents for
    /// `ASSUMED_MONTHLY_RENT` all year. Not a quote.
    pub yearly_savings: f64,
}

/// Fee tier determined solely by how many properties are under management.
pub fn volume_rate_percent(property_count: u32) -> f64 {
    match property_count {
        0 | 1 => 15.0,
        2 => 14.0,
        3..=5 => 13.0,
        6..=10 => 12.0,
        _ => 10.0,
    }
}

pub fn referral_discount_percent(referral_count: u32) -> f64 {
    f64::from(referral_count) * REFERRAL_DISCOUNT_STEP
}

pub fn calculate(input: &RateInput) -> RateResult {
    let volume = volume_rate_percent(input.property_count);
    let discount = referral_discount_percent(input.referral_count);
    let final_rate = (volume - discount).max(FLOOR_RATE_PERCENT);
    let savings = BASE_RATE_PERCENT - final_rate;
    let yearly_savings =
        savings / 100.0 * ASSUMED_MONTHLY_RENT * 12.0 * f64::from(input.property_count);

    RateResult {
        base_rate_percent: BASE_RATE_PERCENT,
        volume_rate_percent: volume,
        referral_discount_percent: discount,
        final_rate_percent: final_rate,
        floor_rate_percent: FLOOR_RATE_PERCENT,
        savings_percent: savings,
        yearly_savings,
    }
}
