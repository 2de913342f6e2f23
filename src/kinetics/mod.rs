pub mod constants;
pub mod model;

pub use constants::*;
pub use model::{absorbed_amount, concentration, elimination_rate, volume_of_distribution};
