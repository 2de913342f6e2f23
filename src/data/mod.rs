mod export;
mod parser;

pub use export::{write_csv, write_json};
pub use parser::{load_log, parse_intake_line, parse_log, parse_profile, DrinkLog, TIMESTAMP_FORMAT};
