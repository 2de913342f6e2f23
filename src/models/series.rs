use chrono::NaiveDateTime;
use serde::Serialize;

/// One point of the simulated curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacSample {
    /// Grid timestamp.
    pub time: NaiveDateTime,

    /// Ethanol absorbed so far across all intakes, in grams.
    pub absorbed_grams: f64,

    /// Cumulative eliminated concentration (permille).
    pub eliminated: f64,

    /// Blood alcohol concentration (permille), never negative.
    pub concentration: f64,
}

/// Ordered output of one simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BacSeries {
    samples: Vec<BacSample>,
}

impl BacSeries {
    pub fn new(samples: Vec<BacSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[BacSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&BacSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&BacSample> {
        self.samples.last()
    }

    /// Sample with the highest concentration (earliest one on ties).
    pub fn peak(&self) -> Option<&BacSample> {
        self.samples.iter().fold(None, |best: Option<&BacSample>, s| match best {
            Some(b) if b.concentration >= s.concentration => Some(b),
            _ => Some(s),
        })
    }

    /// Time at which the concentration returned to zero.
    pub fn sober_at(&self) -> Option<NaiveDateTime> {
        self.last()
            .filter(|s| s.concentration == 0.0)
            .map(|s| s.time)
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.concentration).collect()
    }
}
