use serde::{Deserialize, Serialize};

use crate::status_sheet;

/// Embedded status sheet for the monitored reservoirs.
pub static STATUS_SHEET_CSV: &str = include_str!("../../fixtures/reservoir_status.csv");

/// One row of the reservoir status spreadsheet, after cleaning.
///
/// Numeric columns hold `None` where the source cell was empty, a sentinel
/// string, or otherwise unparsable.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReservoirRecord {
    pub name: String,
    pub district: String,
    pub authorized_person: String,
    pub contact_number: String,
    /// Lowest supply level in meters
    pub lowest_supply_level: Option<f64>,
    /// Full reservoir level in meters
    pub full_reservoir_level: Option<f64>,
    /// Current water level in meters
    pub water_level: Option<f64>,
    /// Level at today's 8:00 AM reading, in meters
    pub level_at_8am: Option<f64>,
    /// Rainfall over the reporting period in millimeters
    pub rainfall_mm: Option<f64>,
}

impl ReservoirRecord {
    /// Get the record table from the embedded status sheet.
    pub fn get_record_vector() -> Vec<ReservoirRecord> {
        if let Ok(r) = status_sheet::parse_status_csv(STATUS_SHEET_CSV) {
            r
        } else {
            panic!("failed to parse embedded status sheet")
        }
    }
}
