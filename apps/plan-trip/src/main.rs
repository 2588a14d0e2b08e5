//! plan-trip — plan one truck trip from the command line and print the
//! `{route, hos_compliance, …}` JSON document.
//!
//! ```text
//! plan-trip <current> <pickup> <dropoff> <cycle-hours>
//!           [--config planner.json] [--gazetteer places.csv]
//! ```
//!
//! The plan is anchored at the local wall-clock time.  Logs go to stderr;
//! set `RUST_LOG=debug` to see location matching and stop layout.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eld_core::{PlanAnchor, PlannerConfig, TripRequest};
use eld_planner::{TripPlannerBuilder, TripResponse};

const USAGE: &str = "usage: plan-trip <current> <pickup> <dropoff> <cycle-hours> \
                     [--config planner.json] [--gazetteer places.csv]";

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    request:   TripRequest,
    config:    Option<PathBuf>,
    gazetteer: Option<PathBuf>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut gazetteer = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => config = Some(raw.next().context("--config needs a path")?.into()),
            "--gazetteer" => {
                gazetteer = Some(raw.next().context("--gazetteer needs a path")?.into())
            }
            "-h" | "--help" => bail!(USAGE),
            _ => positional.push(arg),
        }
    }

    let [current, pickup, dropoff, cycle]: [String; 4] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!(USAGE))?;
    let cycle: f64 = cycle
        .parse()
        .with_context(|| format!("cycle hours must be a number, got {cycle:?}"))?;

    Ok(Args {
        request: TripRequest::new(current, pickup, dropoff, cycle),
        config,
        gazetteer,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config.as_ref())?;

    let mut builder = TripPlannerBuilder::new(config);
    if let Some(path) = &args.gazetteer {
        builder = builder.gazetteer_csv(path)?;
    }
    let planner = builder.build()?;

    let anchor = PlanAnchor::at(Local::now().naive_local());
    info!(%anchor, "anchored plan at local time");

    let plan = planner.plan(&args.request, anchor)?;
    println!("{}", serde_json::to_string_pretty(&TripResponse::from(&plan))?);
    Ok(())
}
