use crate::models::BacSeries;

/// Format the BAC table, one line per sample.
pub fn format_series(series: &BacSeries, time_format: &str) -> String {
    let mut out = String::from("TIME  - BAC\n");
    for sample in series.samples() {
        out.push_str(&format!(
            "{} - {:.2}\n",
            sample.time.format(time_format),
            sample.concentration
        ));
    }
    out
}

/// Format the peak and sober-time summary.
pub fn format_summary(series: &BacSeries, time_format: &str) -> String {
    let mut out = String::from("--- Summary ---\n");

    match series.peak() {
        Some(peak) => out.push_str(&format!(
            "Peak BAC: {:.2} at {}\n",
            peak.concentration,
            peak.time.format(time_format)
        )),
        None => out.push_str("Peak BAC: n/a\n"),
    }

    match series.sober_at() {
        Some(time) => out.push_str(&format!("Sober at: {}\n", time.format(time_format))),
        None => out.push_str("Sober at: n/a\n"),
    }

    out.push_str(&format!("Samples: {}\n", series.len()));
    out
}

/// Print the BAC table.
pub fn display_series(series: &BacSeries, time_format: &str) {
    print!("{}", format_series(series, time_format));
}

/// Print the summary block.
pub fn display_summary(series: &BacSeries, time_format: &str) {
    println!();
    print!("{}", format_summary(series, time_format));
}
