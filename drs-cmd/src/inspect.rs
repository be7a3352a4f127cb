//! Cleaned-table inspection output.
//!
//! Prints one fixed-width line per record so a questionable spreadsheet can
//! be eyeballed after cleaning: which rows survived, which cells coerced to
//! missing.

use drs_records::record::ReservoirRecord;
use log::info;

pub fn run_inspect(status_csv: Option<&str>) -> anyhow::Result<()> {
    let records = crate::load_table(status_csv)?;
    info!("Inspecting {} cleaned records", records.len());

    println!(
        "{:<28} {:<22} {:>12} {:>10} {:>12}",
        "Name", "District", "Water Level", "FRL", "Rainfall mm"
    );
    for record in &records {
        println!("{}", inspect_line(record));
    }
    println!();
    println!("Total records: {}", records.len());
    Ok(())
}

fn fmt_level(level: Option<f64>) -> String {
    match level {
        Some(value) => format!("{:.2}", value),
        None => "---".to_string(),
    }
}

/// One fixed-width summary row.
pub fn inspect_line(record: &ReservoirRecord) -> String {
    format!(
        "{:<28} {:<22} {:>12} {:>10} {:>12}",
        record.name,
        record.district,
        fmt_level(record.water_level),
        fmt_level(record.full_reservoir_level),
        fmt_level(record.rainfall_mm)
    )
}
