//! Release schedule printing.

use chrono::Local;
use drs_schedule::release::{self, ReleaseAssignment};
use log::info;

/// Print the release schedule for the top `num_dams` reservoirs.
///
/// The requested count is clamped to the table size before scheduling.
pub fn run_schedule(num_dams: usize, status_csv: Option<&str>) -> anyhow::Result<()> {
    if num_dams == 0 {
        println!("Number of dams should be greater than 0.");
        return Ok(());
    }

    let records = crate::load_table(status_csv)?;
    let max_dams = num_dams.min(records.len());
    if max_dams < num_dams {
        info!(
            "Requested {} dams, clamping to the {} available",
            num_dams,
            records.len()
        );
    }

    info!(
        "Generating release schedule for {}",
        Local::now().naive_local().date()
    );
    let schedule = release::release_schedule(&records, max_dams);
    for assignment in &schedule {
        println!("{}", schedule_line(assignment));
    }
    println!();
    println!(
        "Total number of dams to release water: {}",
        schedule.len()
    );
    Ok(())
}

/// One printed schedule row.
pub fn schedule_line(assignment: &ReleaseAssignment) -> String {
    format!(
        "{} should release water at {}.",
        assignment.name, assignment.release_time
    )
}
