pub mod render;

pub use render::{display_series, display_summary, format_series, format_summary};
