pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod interface;
pub mod kinetics;
pub mod logging;
pub mod models;

pub use config::{EngineConfig, SimulationConfig};
pub use engine::simulate;
pub use error::{BacError, Result};
pub use models::{BacSample, BacSeries, Intake, Profile, Sex};
