//! holywar — two factions race to build robots from one factory's output.
//!
//! ```text
//! holywar [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! `CONFIG.json` may set any `SimConfig` field (`days`, `storage_capacity`,
//! `max_batch`, `take_cap`, `seed`, `overflow`); missing fields keep their
//! defaults.  The chronicle CSVs go to `OUTPUT_DIR` (default
//! `output/holywar`).  Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fd_core::SimConfig;
use fd_output::{ChronicleReporter, CsvChronicle};
use fd_sim::{SimBuilder, TracingReporter, Verdict};

const FACTIONS: [&str; 2] = ["World", "Wednesday"];
const DEFAULT_OUTPUT_DIR: &str = "output/holywar";

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_thread_names(true).init();

    let mut args = env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let chronicle = Arc::new(ChronicleReporter::new(CsvChronicle::new(&output_dir)?));

    let sim = SimBuilder::new(config)
        .factions(FACTIONS)
        .reporter((TracingReporter, Arc::clone(&chronicle)))
        .build()?;

    let t0 = Instant::now();
    let outcome = sim.run()?;
    let elapsed = t0.elapsed();

    if let Some(e) = chronicle.take_error() {
        tracing::error!(error = %e, "chronicle incomplete");
    }

    println!("======================================");
    println!(
        "Simulation over {} days complete in {:.3} s",
        outcome.days,
        elapsed.as_secs_f64(),
    );
    println!("Factory produced {} parts ({})", outcome.produced.total(), outcome.produced);
    for tally in &outcome.factions {
        println!(
            "Army of faction '{}': {} robots ({} spare parts)",
            tally.name,
            tally.constructs,
            tally.inventory.total(),
        );
    }
    match &outcome.verdict {
        Verdict::Winner { name, .. } => println!("Faction '{name}' wins the holy war!"),
        Verdict::Tie { constructs, .. } => println!("The holy war ends in a draw at {constructs} robots."),
    }
    println!("Chronicle written to {}", output_dir.display());

    Ok(())
}
