use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::BacSeries;

/// Timestamp format for exported rows.
const EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write a series to a CSV file.
pub fn write_csv<P: AsRef<Path>>(series: &BacSeries, path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["time", "absorbed_g", "eliminated", "bac"])?;

    for sample in series.samples() {
        wtr.write_record([
            sample.time.format(EXPORT_TIME_FORMAT).to_string(),
            format!("{:.4}", sample.absorbed_grams),
            format!("{:.4}", sample.eliminated),
            format!("{:.4}", sample.concentration),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a series to a pretty-printed JSON array.
pub fn write_json<P: AsRef<Path>>(series: &BacSeries, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(series)?;
    fs::write(path, json)?;
    Ok(())
}
