pub mod intake;
pub mod profile;
pub mod series;

pub use intake::{split_session, Intake};
pub use profile::{Profile, Sex};
pub use series::{BacSample, BacSeries};
