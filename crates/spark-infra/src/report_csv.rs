//! CSV trip report (tax export)

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use spark_domain::model::TripRecord;
use spark_types::Result;

/// Report columns, in the field order of [`TripReportRow`]
pub const REPORT_COLUMNS: [&str; 14] = [
    "date",
    "pay",
    "one_way_miles",
    "round_trip_miles",
    "minutes",
    "stops",
    "vehicle",
    "mpg",
    "gallons",
    "gas_cost",
    "wear_tear",
    "net",
    "rating",
    "notes",
];

/// One report line per trip
#[derive(Debug, Serialize)]
struct TripReportRow<'a> {
    date: String,
    pay: f64,
    one_way_miles: f64,
    round_trip_miles: f64,
    minutes: u32,
    stops: u32,
    vehicle: String,
    mpg: Option<f64>,
    gallons: Option<String>,
    gas_cost: Option<String>,
    wear_tear: Option<String>,
    net: String,
    rating: &'static str,
    notes: &'a str,
}

impl<'a> From<&'a TripRecord> for TripReportRow<'a> {
    fn from(record: &'a TripRecord) -> Self {
        let economics = record.economics.as_ref();
        TripReportRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            pay: record.input.gross_pay,
            one_way_miles: record.input.one_way_miles,
            round_trip_miles: record.round_trip_miles(),
            minutes: record.input.duration_minutes,
            stops: record.input.stop_count,
            vehicle: record.vehicle.to_string(),
            mpg: economics.map(|e| e.mpg),
            gallons: economics.map(|e| format!("{:.3}", e.gallons)),
            gas_cost: economics.map(|e| format!("{:.2}", e.gas_cost)),
            wear_tear: economics.map(|e| format!("{:.2}", e.wear_tear)),
            net: format!("{:.2}", record.net()),
            rating: record.rating.map(|r| r.as_str()).unwrap_or("unrated"),
            notes: record.notes.as_deref().unwrap_or(""),
        }
    }
}

/// Write trips as CSV with a header row, even when there are no trips
pub fn write_trips_csv<W: Write>(writer: W, records: &[TripRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        csv_writer.serialize(TripReportRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export trips to a CSV file
pub fn export_trips_csv(path: &Path, records: &[TripRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_trips_csv(file, records)?;
    log::info!("exported {} trips to {}", records.len(), path.display());
    Ok(())
}
