//! drs-web - Web form frontend for the dam release scheduler.
//!
//! Serves a single page: a form asking how many dams to schedule, and the
//! resulting release schedule with per-row water level classes. GET renders
//! the empty form; POST runs the scheduler over the load-once record table.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use clap::Parser;
use drs_records::record::ReservoirRecord;
use drs_schedule::release;
use log::{debug, info};
use serde::Deserialize;

mod render;

#[derive(Parser)]
#[command(
    name = "drs-web",
    version,
    about = "Dam release schedule web form"
)]
struct Args {
    /// Address to serve on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Path to a status spreadsheet (defaults to the embedded sheet)
    #[arg(long)]
    status_csv: Option<String>,
}

/// Record table shared read-only across request handlers.
type Table = Arc<Vec<ReservoirRecord>>;

#[derive(Deserialize)]
struct ScheduleForm {
    num_dams: Option<String>,
}

async fn index() -> Html<String> {
    Html(render::page(&[]))
}

async fn submit(State(table): State<Table>, Form(form): Form<ScheduleForm>) -> Html<String> {
    let schedule = match parse_num_dams(form.num_dams.as_deref()) {
        Some(num_dams) => {
            let max_dams = num_dams.min(table.len());
            release::release_schedule(&table, max_dams)
        }
        None => {
            debug!("Ignoring request with invalid num_dams field");
            Vec::new()
        }
    };
    Html(render::page(&schedule))
}

/// Parse the `num_dams` form field.
///
/// Missing, non-numeric, and non-positive values are caller-input errors
/// and yield `None`; the handler answers with the empty-schedule page.
fn parse_num_dams(field: Option<&str>) -> Option<usize> {
    let parsed = field?.trim().parse::<i64>().ok()?;
    if parsed > 0 {
        Some(parsed as usize)
    } else {
        None
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = match args.status_csv.as_deref() {
        Some(path) => drs_records::status_sheet::load_status_csv(path)
            .with_context(|| format!("failed to load status sheet from {}", path))?,
        None => ReservoirRecord::get_record_vector(),
    };
    info!("Loaded {} reservoir records", table.len());

    let app = Router::new()
        .route("/", get(index).post(submit))
        .with_state(Arc::new(table));

    info!("Serving dam release schedule on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
