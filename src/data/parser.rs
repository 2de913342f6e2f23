use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{BacError, Result};
use crate::models::{split_session, Intake, Profile, Sex};

/// Timestamp format used for intakes, e.g. `24.12.2023-19:30`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y-%H:%M";

/// Parsed contents of a data file.
#[derive(Debug, Clone)]
pub struct DrinkLog {
    pub profile: Profile,

    /// Intakes in file order, with timed sessions already expanded.
    pub intakes: Vec<Intake>,
}

/// Load a drink log from disk.
pub fn load_log<P: AsRef<Path>>(path: P) -> Result<DrinkLog> {
    let content = fs::read_to_string(path)?;
    parse_log(&content)
}

/// Parse a drink log.
///
/// The first non-comment line is the profile:
/// `<sex> <weight_kg> <height_cm> <absorption_rate> <interval_minutes>`.
/// Every following line is an intake:
/// `<dd.mm.YYYY-HH:MM> <volume_ml> <percent> [<duration_minutes>]`.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_log(content: &str) -> Result<DrinkLog> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (profile_line, raw_profile) = lines.next().ok_or_else(|| BacError::Parse {
        line: 1,
        message: "missing profile line".to_string(),
    })?;
    let profile = parse_profile(raw_profile).map_err(|e| at_line(profile_line, e))?;

    let mut intakes = Vec::new();
    for (line, raw) in lines {
        let parsed = parse_intake_line(raw).map_err(|e| at_line(line, e))?;
        intakes.extend(parsed);
    }

    tracing::debug!(intakes = intakes.len(), "parsed drink log");
    Ok(DrinkLog { profile, intakes })
}

/// Parse `<sex> <weight> <height> <absorption_rate> <interval>`.
pub fn parse_profile(raw: &str) -> Result<Profile> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(BacError::InvalidInput(format!(
            "profile needs 5 fields (sex weight height absorption_rate interval), found {}",
            fields.len()
        )));
    }

    let sex: Sex = fields[0].parse()?;
    Profile::new(
        sex,
        parse_number("weight", fields[1])?,
        parse_number("height", fields[2])?,
        parse_number("absorption rate", fields[3])?,
        parse_number("interval", fields[4])?,
    )
}

/// Parse one intake line, expanding a timed session into per-minute intakes.
pub fn parse_intake_line(raw: &str) -> Result<Vec<Intake>> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(BacError::InvalidInput(format!(
            "intake needs 3 or 4 fields (time volume percent [duration]), found {}",
            fields.len()
        )));
    }

    let time = NaiveDateTime::parse_from_str(fields[0], TIMESTAMP_FORMAT).map_err(|e| {
        BacError::InvalidInput(format!(
            "invalid time '{}' (expected dd.mm.YYYY-HH:MM): {}",
            fields[0], e
        ))
    })?;
    let volume = parse_number("volume", fields[1])?;
    let percent = parse_number("percent", fields[2])?;
    let intake = Intake::from_drink(time, volume, percent)?;

    match fields.get(3) {
        Some(raw_duration) => {
            let duration: u32 = raw_duration.parse().map_err(|_| {
                BacError::InvalidInput(format!("invalid duration '{}'", raw_duration))
            })?;
            split_session(intake.time, intake.grams, duration)
        }
        None => Ok(vec![intake]),
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| BacError::InvalidInput(format!("invalid {} '{}'", field, raw)))
}

fn at_line(line: usize, err: BacError) -> BacError {
    match err {
        parse @ BacError::Parse { .. } => parse,
        other => BacError::Parse {
            line,
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
male 80 180 1.0 30
# friday
01.03.2024-20:00 500 5
01.03.2024-21:30 40 40 4
";

    #[test]
    fn test_parse_sample_log() {
        let log = parse_log(SAMPLE).unwrap();
        assert_eq!(log.profile.sex(), Sex::Male);
        assert_eq!(log.profile.interval_minutes(), 30.0);

        // 1 plain intake + 4 per-minute sub-intakes
        assert_eq!(log.intakes.len(), 5);
        assert!((log.intakes[0].grams - 25.0).abs() < 1e-9);
        assert!((log.intakes[1].grams - 4.0).abs() < 1e-9);
        assert_eq!(
            log.intakes[4].time,
            NaiveDateTime::parse_from_str("01.03.2024-21:33", TIMESTAMP_FORMAT).unwrap()
        );
    }

    #[test]
    fn test_load_log_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let log = load_log(file.path()).unwrap();
        assert_eq!(log.intakes.len(), 5);
    }

    #[test]
    fn test_unsupported_sex_reports_line() {
        let err = parse_log("robot 80 180 1.0 30\n").unwrap_err();
        match err {
            BacError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("robot"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_intake_reports_line() {
        let content = "female 60 165 1.0 15\n\n01.03.2024-20:00 500 abc\n";
        let err = parse_log(content).unwrap_err();
        assert!(matches!(err, BacError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_bad_timestamp() {
        let err = parse_intake_line("2024-03-01T20:00 500 5").unwrap_err();
        assert!(err.to_string().contains("invalid time"));
    }

    #[test]
    fn test_missing_profile() {
        let err = parse_log("# only a comment\n").unwrap_err();
        assert!(matches!(err, BacError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_profile_without_intakes() {
        let log = parse_log("male 80 180 1.0 30\n").unwrap();
        assert!(log.intakes.is_empty());
    }
}
