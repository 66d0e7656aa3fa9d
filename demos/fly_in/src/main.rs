//! fly_in — route a drone fleet from the start hub to the end hub and print
//! the per-turn move listing.
//!
//! ```text
//! fly_in [MAP] [--output DIR] [--sqlite]
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only the
//! turn log.

mod sample;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fl_fleet::{FleetError, FleetResult, FleetScheduler, NoopObserver};
use fl_graph::HubGraph;
use fl_map::{load_map_file, load_map_str};
use fl_output::{CsvWriter, FleetOutputObserver, OutputWriter, TurnLog};
use fl_plan::TimeExpandedPlanner;

#[derive(Parser)]
#[command(name = "fly_in")]
#[command(about = "Route every drone from the start hub to the end hub")]
struct Args {
    /// Map file; the built-in sample map is used when omitted.
    map: Option<PathBuf>,

    /// Write trajectories and occupancy into this directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write `fleet.db` instead of CSV files (requires the `sqlite` feature).
    #[arg(long, requires = "output")]
    sqlite: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let graph = match &args.map {
        Some(path) => load_map_file(path)
            .with_context(|| format!("failed to load map {}", path.display()))?,
        None => load_map_str("sample", sample::SAMPLE_MAP).context("built-in sample map")?,
    };
    info!(
        map = %graph.name,
        hubs = graph.hub_count(),
        links = graph.link_count(),
        drones = graph.drone_count,
        "map loaded"
    );

    let started = Instant::now();
    let mut scheduler = FleetScheduler::new(&graph, TimeExpandedPlanner);
    let outcome = match &args.output {
        Some(dir) => run_with_output(&mut scheduler, &graph, dir, args.sqlite)?,
        None => scheduler.run(&mut NoopObserver),
    };
    let elapsed = started.elapsed();

    match outcome {
        Ok(()) => {
            println!("{}", TurnLog::new(&graph, scheduler.trajectories()));
            info!(
                makespan = scheduler.makespan(),
                elapsed_ms = elapsed.as_millis() as u64,
                "all drones routed"
            );
            Ok(())
        }
        Err(FleetError::Plan { drone, source }) => bail!(
            "{drone} could not be routed ({source}); {} of {} drones were routed",
            scheduler.trajectories().len(),
            graph.drone_count
        ),
        Err(e) => Err(e.into()),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn run_with_output(
    scheduler: &mut FleetScheduler<'_, TimeExpandedPlanner>,
    graph:     &HubGraph,
    dir:       &Path,
    sqlite:    bool,
) -> Result<FleetResult<()>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    if sqlite {
        #[cfg(feature = "sqlite")]
        {
            let writer = fl_output::SqliteWriter::new(dir)?;
            return drive(scheduler, graph, writer);
        }
        #[cfg(not(feature = "sqlite"))]
        bail!("--sqlite needs fly_in built with the `sqlite` feature");
    }

    drive(scheduler, graph, CsvWriter::new(dir)?)
}

fn drive<W: OutputWriter>(
    scheduler: &mut FleetScheduler<'_, TimeExpandedPlanner>,
    graph:     &HubGraph,
    writer:    W,
) -> Result<FleetResult<()>> {
    let mut obs = FleetOutputObserver::new(writer, graph);
    let outcome = scheduler.run(&mut obs);
    if let Some(e) = obs.take_error() {
        return Err(e).context("failed to write output");
    }
    Ok(outcome)
}
