use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BacError, Result};

/// Biological sex, which selects the distribution and elimination coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl FromStr for Sex {
    type Err = BacError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(BacError::UnsupportedSex(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

/// Physiological parameters for one simulation run.
///
/// Fields are private so a `Profile` can only exist in a validated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    absorption_rate: f64,
    interval_minutes: f64,
}

impl Profile {
    /// Build a profile, rejecting any non-positive or non-finite parameter.
    pub fn new(
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        absorption_rate: f64,
        interval_minutes: f64,
    ) -> Result<Self> {
        require_positive("weight", weight_kg)?;
        require_positive("height", height_cm)?;
        require_positive("absorption rate", absorption_rate)?;
        require_positive("interval", interval_minutes)?;

        Ok(Self {
            sex,
            weight_kg,
            height_cm,
            absorption_rate,
            interval_minutes,
        })
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    #[inline]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// First-order absorption rate constant, per hour.
    #[inline]
    pub fn absorption_rate(&self) -> f64 {
        self.absorption_rate
    }

    #[inline]
    pub fn interval_minutes(&self) -> f64 {
        self.interval_minutes
    }

    /// Sampling interval expressed in hours.
    #[inline]
    pub fn interval_hours(&self) -> f64 {
        self.interval_minutes / 60.0
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BacError::InvalidProfile {
            field,
            reason: format!("must be a finite number, got {}", value),
        });
    }
    if value <= 0.0 {
        return Err(BacError::InvalidProfile {
            field,
            reason: format!("must be positive, got {}", value),
        });
    }
    Ok(())
}
