use chrono::NaiveDateTime;

use crate::config::EngineConfig;
use crate::engine::{advance, grid_step, hours_between};
use crate::error::{BacError, Result};
use crate::kinetics::absorbed_amount;
use crate::models::{Intake, Profile};

/// Grams absorbed so far from each intake, one row per grid step.
///
/// Row `i` describes time `start + i * interval`; column `j` matches intake `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsorptionTable {
    start: NaiveDateTime,
    rows: Vec<Vec<f64>>,
}

impl AbsorptionTable {
    /// Walk the grid from the first intake until the last one is fully absorbed.
    ///
    /// `intakes` must be sorted by time. The last intake counts as absorbed once
    /// the grid has moved past it and it is within `absorption_epsilon` grams of
    /// its total.
    pub fn build(profile: &Profile, intakes: &[Intake], config: &EngineConfig) -> Result<Self> {
        let (first, last) = match (intakes.first(), intakes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(BacError::EmptyIntakes),
        };

        let step = grid_step(profile)?;
        let rate = profile.absorption_rate();
        let mut rows = Vec::new();
        let mut current = first.time;

        for _ in 0..config.max_steps {
            let row: Vec<f64> = intakes
                .iter()
                .map(|intake| {
                    // Not drunk yet
                    if current < intake.time {
                        return 0.0;
                    }
                    absorbed_amount(intake.grams, rate, hours_between(intake.time, current))
                })
                .collect();

            let last_absorbed = row.last().copied().unwrap_or(0.0);
            rows.push(row);

            if current > last.time && (last.grams - last_absorbed).abs() < config.absorption_epsilon
            {
                tracing::debug!(rows = rows.len(), "absorption table converged");
                return Ok(Self {
                    start: first.time,
                    rows,
                });
            }

            current = advance(current, step)?;
        }

        tracing::warn!(
            steps = config.max_steps,
            "absorption table did not converge"
        );
        Err(BacError::NotConverged {
            phase: "absorption",
            steps: config.max_steps,
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total grams absorbed across all intakes at step `i`, if the table reaches it.
    pub fn total_at(&self, i: usize) -> Option<f64> {
        self.rows.get(i).map(|row| row.iter().sum())
    }
}
