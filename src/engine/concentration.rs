use chrono::NaiveDateTime;

use crate::config::EngineConfig;
use crate::engine::absorption::AbsorptionTable;
use crate::engine::{advance, grid_step, step_hours};
use crate::error::{BacError, Result};
use crate::kinetics::{concentration, elimination_rate};
use crate::models::{BacSample, BacSeries, Profile};

/// Fold an absorption table into a BAC curve.
///
/// Elimination is integrated with forward Euler: the rate applied during a
/// step comes from the previous sample's concentration. Once the table runs
/// out, absorbed grams carry forward unchanged. Stops at the first zero
/// sample strictly after `last_intake`.
pub fn bac_series(
    profile: &Profile,
    vda: f64,
    table: &AbsorptionTable,
    last_intake: NaiveDateTime,
    config: &EngineConfig,
) -> Result<BacSeries> {
    let step = grid_step(profile)?;
    let hours_per_step = step_hours(step);
    let mut samples: Vec<BacSample> = Vec::new();
    let mut current = table.start();

    for i in 0..config.max_steps {
        let (absorbed, eliminated) = match samples.last() {
            Some(prev) => {
                let rate = elimination_rate(profile.sex(), prev.concentration);
                (
                    table.total_at(i).unwrap_or(prev.absorbed_grams),
                    prev.eliminated + rate * hours_per_step,
                )
            }
            None => (table.total_at(i).unwrap_or(0.0), 0.0),
        };

        let mut bac = concentration(absorbed, profile.weight_kg(), vda, eliminated);
        if bac < config.zero_threshold {
            bac = 0.0;
        }

        samples.push(BacSample {
            time: current,
            absorbed_grams: absorbed,
            eliminated,
            concentration: bac,
        });

        if bac == 0.0 && current > last_intake {
            tracing::debug!(samples = samples.len(), "BAC returned to zero");
            return Ok(BacSeries::new(samples));
        }

        current = advance(current, step)?;
    }

    tracing::warn!(steps = config.max_steps, "BAC series did not converge");
    Err(BacError::NotConverged {
        phase: "BAC series",
        steps: config.max_steps,
    })
}
