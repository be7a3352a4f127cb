//! Command implementations for the dam release scheduler CLI.
//!
//! Provides subcommands for printing the daily release schedule and for
//! inspecting the cleaned record table.

use clap::Subcommand;
use drs_records::record::ReservoirRecord;
use log::info;

pub mod inspect;
pub mod schedule;

#[derive(Subcommand)]
pub enum Command {
    /// Print a release schedule for the top-N reservoirs by water level
    Schedule {
        /// Number of dams to schedule for release
        #[arg(short = 'n', long)]
        num_dams: usize,

        /// Path to a status spreadsheet (defaults to the embedded sheet)
        #[arg(long)]
        status_csv: Option<String>,
    },

    /// Print the cleaned record table for spreadsheet sanity checking
    Inspect {
        /// Path to a status spreadsheet (defaults to the embedded sheet)
        #[arg(long)]
        status_csv: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Schedule {
            num_dams,
            status_csv,
        } => schedule::run_schedule(num_dams, status_csv.as_deref()),
        Command::Inspect { status_csv } => inspect::run_inspect(status_csv.as_deref()),
    }
}

/// Load the record table from a spreadsheet path, or fall back to the
/// embedded status sheet.
pub(crate) fn load_table(status_csv: Option<&str>) -> anyhow::Result<Vec<ReservoirRecord>> {
    match status_csv {
        Some(path) => {
            let records = drs_records::status_sheet::load_status_csv(path)?;
            info!("Loaded {} reservoir records from {}", records.len(), path);
            Ok(records)
        }
        None => {
            let records = ReservoirRecord::get_record_vector();
            info!(
                "Loaded {} reservoir records from the embedded status sheet",
                records.len()
            );
            Ok(records)
        }
    }
}
