use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{BacError, Result};

/// A single drink event: when it happened and how much ethanol it held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intake {
    pub time: NaiveDateTime,

    /// Pure ethanol, in grams.
    pub grams: f64,
}

impl Intake {
    /// Create an intake, rejecting negative or non-finite amounts.
    pub fn new(time: NaiveDateTime, grams: f64) -> Result<Self> {
        if !grams.is_finite() || grams < 0.0 {
            return Err(BacError::InvalidIntake {
                reason: format!("ethanol amount must be a non-negative number, got {}", grams),
            });
        }
        Ok(Self { time, grams })
    }

    /// Create an intake from a drink volume (mL) and its strength (% by volume).
    pub fn from_drink(time: NaiveDateTime, volume_ml: f64, percent: f64) -> Result<Self> {
        if !volume_ml.is_finite() || volume_ml < 0.0 {
            return Err(BacError::InvalidIntake {
                reason: format!("volume must be a non-negative number, got {}", volume_ml),
            });
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(BacError::InvalidIntake {
                reason: format!("strength must be within 0-100%, got {}", percent),
            });
        }
        Self::new(time, volume_ml * percent / 100.0)
    }
}

/// Spread one long drinking session into per-minute sub-intakes.
///
/// The amount is divided evenly over `duration_minutes` intakes, the first at
/// `time` and each following one a minute later.
pub fn split_session(time: NaiveDateTime, grams: f64, duration_minutes: u32) -> Result<Vec<Intake>> {
    if duration_minutes == 0 {
        return Err(BacError::InvalidIntake {
            reason: "drinking duration must be at least one minute".to_string(),
        });
    }

    let sub_grams = grams / duration_minutes as f64;
    (0..duration_minutes)
        .map(|minute| Intake::new(time + Duration::minutes(minute as i64), sub_grams))
        .collect()
}
