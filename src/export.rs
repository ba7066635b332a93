//! Export projection output as CSV or JSON for charting

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::projection::ProjectionResult;

/// Write the monthly series as `Month,Principal,Interest,Total`
pub fn write_series_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Month", "Principal", "Interest", "Total"])?;

    for point in &result.series {
        csv_writer.write_record(&[
            point.month_index.to_string(),
            format!("{:.2}", point.principal),
            format!("{:.2}", point.interest),
            format!("{:.2}", point.total),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON for any serializable output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
