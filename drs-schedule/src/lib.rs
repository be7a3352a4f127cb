//! Release scheduling over cleaned reservoir status records.
//!
//! This crate turns a record table into daily release assignments:
//! reservoirs ranked by current water level, each assigned a slot from
//! the fixed 4-slot release-time rotation.

/// Ranking and release-time assignment.
pub mod release {
    use drs_records::record::ReservoirRecord;
    use log::debug;
    use serde::Serialize;
    use std::cmp::Ordering;

    /// The fixed daily release-time rotation.
    pub const RELEASE_TIMES: [&str; 4] = ["8:00 AM", "12:00 PM", "4:00 PM", "8:00 PM"];

    /// A scheduled release for one reservoir.
    ///
    /// Built fresh on every scheduling call; carries the water level the
    /// reservoir was ranked with.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ReleaseAssignment {
        pub name: String,
        pub release_time: &'static str,
        pub water_level: Option<f64>,
    }

    /// Rank reservoirs by water level and assign release times.
    ///
    /// Returns up to `requested` assignments, ordered by water level
    /// descending. A record with no water level ranks below every recorded
    /// level. Ties keep their original table order (the sort is stable),
    /// so repeated calls over the same table produce identical output.
    /// The rotation is indexed by output position: it starts at "8:00 AM"
    /// for every schedule and cycles every four assignments.
    pub fn release_schedule(
        records: &[ReservoirRecord],
        requested: usize,
    ) -> Vec<ReleaseAssignment> {
        if requested == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<&ReservoirRecord> = records.iter().collect();
        ranked.sort_by(|a, b| compare_levels(b.water_level, a.water_level));
        debug!(
            "Scheduling {} of {} reservoirs",
            requested.min(ranked.len()),
            ranked.len()
        );
        ranked
            .iter()
            .take(requested)
            .enumerate()
            .map(|(position, record)| ReleaseAssignment {
                name: record.name.clone(),
                release_time: RELEASE_TIMES[position % RELEASE_TIMES.len()],
                water_level: record.water_level,
            })
            .collect()
    }

    /// Order two level readings; a missing reading sorts as the minimum.
    fn compare_levels(a: Option<f64>, b: Option<f64>) -> Ordering {
        let a = a.unwrap_or(f64::NEG_INFINITY);
        let b = b.unwrap_or(f64::NEG_INFINITY);
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }

}

/// Display classification of water levels.
pub mod bucket {
    use std::fmt;

    /// Display bucket for a water level reading.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LevelBucket {
        Low,
        Medium,
        High,
    }

    impl LevelBucket {
        /// Classify a raw reading (units as stored, no normalization).
        ///
        /// A missing reading reads as 0.0 and lands in `Low`.
        pub fn classify(level: Option<f64>) -> LevelBucket {
            let value = level.unwrap_or(0.0);
            if value <= 50.0 {
                LevelBucket::Low
            } else if value <= 100.0 {
                LevelBucket::Medium
            } else {
                LevelBucket::High
            }
        }

        /// CSS class name used by the web frontend's schedule rows.
        pub fn css_class(&self) -> &'static str {
            match self {
                LevelBucket::Low => "low",
                LevelBucket::Medium => "medium",
                LevelBucket::High => "high",
            }
        }
    }

    impl fmt::Display for LevelBucket {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.css_class())
        }
    }

}
