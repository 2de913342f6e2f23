pub mod absorption;
pub mod concentration;

use chrono::{Duration, NaiveDateTime};

use crate::config::EngineConfig;
use crate::error::{BacError, Result};
use crate::kinetics::volume_of_distribution;
use crate::models::{BacSeries, Intake, Profile};

pub use absorption::AbsorptionTable;
pub use concentration::bac_series;

/// Run a full simulation: absorption table first, then the BAC curve.
///
/// Intakes may be given in any order; they are sorted by time here.
pub fn simulate(profile: &Profile, intakes: &[Intake], config: &EngineConfig) -> Result<BacSeries> {
    if intakes.is_empty() {
        return Err(BacError::EmptyIntakes);
    }
    config.validate()?;

    let mut sorted = intakes.to_vec();
    sorted.sort_by_key(|intake| intake.time);
    let last_intake = sorted[sorted.len() - 1].time;

    let vda = volume_of_distribution(profile.sex(), profile.weight_kg(), profile.height_cm());
    tracing::debug!(
        sex = %profile.sex(),
        vda,
        intakes = sorted.len(),
        "starting simulation"
    );

    let table = AbsorptionTable::build(profile, &sorted, config)?;
    bac_series(profile, vda, &table, last_intake, config)
}

/// Distance between two grid points.
pub(crate) fn grid_step(profile: &Profile) -> Result<Duration> {
    let millis = (profile.interval_minutes() * 60_000.0).round();
    if millis < 1.0 {
        return Err(BacError::InvalidProfile {
            field: "interval",
            reason: format!("is below the 1 ms resolution, got {} min", profile.interval_minutes()),
        });
    }

    let too_large = || BacError::InvalidProfile {
        field: "interval",
        reason: format!("is too large, got {} min", profile.interval_minutes()),
    };
    if millis >= i64::MAX as f64 {
        return Err(too_large());
    }
    Duration::try_milliseconds(millis as i64).ok_or_else(too_large)
}

/// Grid step in hours, as actually walked after millisecond rounding.
pub(crate) fn step_hours(step: Duration) -> f64 {
    step.num_milliseconds() as f64 / 3_600_000.0
}

/// Move one grid step forward, failing if the calendar runs out.
pub(crate) fn advance(current: NaiveDateTime, step: Duration) -> Result<NaiveDateTime> {
    current
        .checked_add_signed(step)
        .ok_or_else(|| BacError::InvalidProfile {
            field: "interval",
            reason: format!("moves the time grid past {} out of range", current),
        })
}

/// Hours from `from` to `to`; negative when `to` is earlier.
pub(crate) fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}
