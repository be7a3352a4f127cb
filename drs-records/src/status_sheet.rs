//! Status spreadsheet ingestion and column cleaning.
//!
//! The source sheet arrives with two banner lines, a header row, and then
//! one row per reservoir in a fixed 17-column layout. Rows without a
//! reservoir name are dropped; the five numeric columns coerce to missing
//! on anything unparsable.

use csv::ReaderBuilder;
use log::debug;
use std::path::Path;
use thiserror::Error;

use crate::record::ReservoirRecord;

/// Number of report banner lines preceding the header row.
pub const NOISE_LINES: usize = 2;

/// Expected number of columns in a status sheet row.
pub const CSV_ROW_LENGTH: usize = 17;

/// 0-based column positions in the status sheet.
///
/// Columns 10..17 are unused filler carried by the source spreadsheet.
pub mod columns {
    pub const SERIAL: usize = 0;
    pub const NAME: usize = 1;
    pub const DISTRICT: usize = 2;
    pub const AUTHORIZED_PERSON: usize = 3;
    pub const CONTACT_NUMBER: usize = 4;
    pub const LOWEST_SUPPLY_LEVEL: usize = 5;
    pub const FULL_RESERVOIR_LEVEL: usize = 6;
    pub const WATER_LEVEL: usize = 7;
    pub const LEVEL_AT_8AM: usize = 8;
    pub const RAINFALL_MM: usize = 9;
}

/// Errors raised while reading a status sheet.
///
/// Malformed cells are not errors; only unreadable input is.
#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("failed to read status sheet: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse status sheet CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a numeric cell, coercing sentinel and malformed values to missing.
fn parse_level(cell: &str) -> Option<f64> {
    let lowered = cell.trim().to_lowercase();
    match lowered.as_str() {
        "" | "null" | "n/a" | "na" | "nil" | "-" | "---" => None,
        s => s.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

/// Strip the banner lines so the csv reader sees the header row first.
fn skip_noise_lines(sheet: &str) -> &str {
    let mut rest = sheet;
    for _ in 0..NOISE_LINES {
        match rest.split_once('\n') {
            Some((_, tail)) => rest = tail,
            None => return "",
        }
    }
    rest
}

/// Parse a status sheet string into reservoir records.
///
/// Short rows are tolerated: absent cells read as empty. Rows whose
/// reservoir-name cell is blank are dropped.
pub fn parse_status_csv(sheet: &str) -> Result<Vec<ReservoirRecord>, RecordsError> {
    let mut records: Vec<ReservoirRecord> = Vec::new();
    let mut dropped = 0usize;
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(skip_noise_lines(sheet).as_bytes());
    for row in rdr.records() {
        let rho = row?;
        let cell = |idx: usize| rho.get(idx).unwrap_or_default().trim();
        let name = cell(columns::NAME);
        if name.is_empty() {
            dropped += 1;
            continue;
        }
        records.push(ReservoirRecord {
            name: name.to_string(),
            district: cell(columns::DISTRICT).to_string(),
            authorized_person: cell(columns::AUTHORIZED_PERSON).to_string(),
            contact_number: cell(columns::CONTACT_NUMBER).to_string(),
            lowest_supply_level: parse_level(cell(columns::LOWEST_SUPPLY_LEVEL)),
            full_reservoir_level: parse_level(cell(columns::FULL_RESERVOIR_LEVEL)),
            water_level: parse_level(cell(columns::WATER_LEVEL)),
            level_at_8am: parse_level(cell(columns::LEVEL_AT_8AM)),
            rainfall_mm: parse_level(cell(columns::RAINFALL_MM)),
        });
    }
    if dropped > 0 {
        debug!("Dropped {} rows without a reservoir name", dropped);
    }
    Ok(records)
}

/// Read a status sheet file and parse it into reservoir records.
pub fn load_status_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ReservoirRecord>, RecordsError> {
    let sheet = std::fs::read_to_string(path)?;
    parse_status_csv(&sheet)
}

#[cfg(test)]
mod tests {
    use super::{parse_level, parse_status_csv, skip_noise_lines};

    const HEADER: &str = "S.No.,Name of the Reservoir,District,Authorised Person,Contact No.,LSL in Meter,FRL in Meter,Water Level,Today 8:00 AM,Rainfall in mm,U1,U2,U3,U4,U5,U6,U7";

    fn sheet_with_rows(rows: &[&str]) -> String {
        let mut sheet = String::from("Daily Reservoir Status Report\nLevels in meters\n");
        sheet.push_str(HEADER);
        sheet.push('\n');
        for row in rows {
            sheet.push_str(row);
            sheet.push('\n');
        }
        sheet
    }

    #[test]
    fn test_skip_noise_lines() {
        assert_eq!(skip_noise_lines("a\nb\nc\nd"), "c\nd");
        assert_eq!(skip_noise_lines("a\nb"), "");
        assert_eq!(skip_noise_lines(""), "");
    }

    #[test]
    fn test_column_mapping() {
        let sheet = sheet_with_rows(&[
            "1,Srisailam,Kurnool,B. Ramesh,9440123456,243.84,269.75,264.20,263.95,12.5,,,,,,,",
        ]);
        let records = parse_status_csv(&sheet).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.name, "Srisailam");
        assert_eq!(r.district, "Kurnool");
        assert_eq!(r.authorized_person, "B. Ramesh");
        assert_eq!(r.contact_number, "9440123456");
        assert_eq!(r.lowest_supply_level, Some(243.84));
        assert_eq!(r.full_reservoir_level, Some(269.75));
        assert_eq!(r.water_level, Some(264.20));
        assert_eq!(r.level_at_8am, Some(263.95));
        assert_eq!(r.rainfall_mm, Some(12.5));
    }

    #[test]
    fn test_nameless_rows_dropped() {
        let sheet = sheet_with_rows(&[
            "1,Kadem,Nirmal,V. Laxman,9440890123,76.25,97.54,88.40,88.15,40.2,,,,,,,",
            "2,,Khammam,--,--,10.00,15.00,12.00,12.00,0.0,,,,,,,",
            "3,   ,Khammam,--,--,10.00,15.00,12.00,12.00,0.0,,,,,,,",
        ]);
        let records = parse_status_csv(&sheet).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Kadem");
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(parse_level("264.20"), Some(264.20));
        assert_eq!(parse_level(" 12.5 "), Some(12.5));
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("NIL"), None);
        assert_eq!(parse_level("n/a"), None);
        assert_eq!(parse_level("null"), None);
        assert_eq!(parse_level("-"), None);
        assert_eq!(parse_level("---"), None);
        assert_eq!(parse_level("dry"), None);
        assert_eq!(parse_level("nan"), None);
    }

    #[test]
    fn test_short_rows_tolerated() {
        let sheet = sheet_with_rows(&["1,Palair"]);
        let records = parse_status_csv(&sheet).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Palair");
        assert_eq!(records[0].district, "");
        assert_eq!(records[0].water_level, None);
        assert_eq!(records[0].rainfall_mm, None);
    }

    #[test]
    fn test_sentinel_cells_coerce_to_missing() {
        let sheet = sheet_with_rows(&[
            "1,Musi,Nalgonda,R. Yadagiri,9441123456,34.75,43.28,NIL,NIL,n/a,,,,,,,",
        ]);
        let records = parse_status_csv(&sheet).unwrap();
        assert_eq!(records[0].water_level, None);
        assert_eq!(records[0].level_at_8am, None);
        assert_eq!(records[0].rainfall_mm, None);
        assert_eq!(records[0].lowest_supply_level, Some(34.75));
    }
}
