//! levy_walk — run a walker population from a TOML scenario.
//!
//! ```text
//! levy_walk                                  # embedded bounded-wait scenario
//! levy_walk scenarios/rapid_homesick.toml    # any scenario file
//! RUST_LOG=rw_sim=debug levy_walk            # per-tick logging
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rw_core::{Position, SimConfig};
use rw_sim::{SimBuilder, TrajectoryRecord, TrajectoryRecorder};
use rw_walker::{TickEvent, WalkerConfig};

const DEFAULT_SCENARIO: &str = include_str!("../scenarios/bounded_wait.toml");

// ── Scenario file ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Scenario {
    #[serde(default)]
    sim:        SimConfig,
    population: Population,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Population {
    count:  usize,
    /// Shared start (and origin) of every walker.
    #[serde(default)]
    start:  Position,
    walker: WalkerConfig,
}

fn load_scenario() -> Result<(String, Scenario)> {
    let (label, text) = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            (path.display().to_string(), text)
        }
        None => ("bounded_wait (embedded)".to_string(), DEFAULT_SCENARIO.to_string()),
    };
    let scenario = toml::from_str(&text).with_context(|| format!("parsing scenario {label}"))?;
    Ok((label, scenario))
}

// ── Summary helpers ───────────────────────────────────────────────────────────

fn event_label(event: TickEvent) -> &'static str {
    match event {
        TickEvent::Retargeted { homeward: false } => "retargeted",
        TickEvent::Retargeted { homeward: true }  => "retargeted home",
        TickEvent::RedirectedHome                 => "redirected home",
        TickEvent::Moved { .. }                   => "moved",
        TickEvent::Arrived { .. }                 => "arrived",
        TickEvent::TripTruncated                  => "trip truncated",
        TickEvent::StartedWaiting                 => "started waiting",
        TickEvent::Waited                         => "waited",
        TickEvent::TargetCleared                  => "target cleared",
    }
}

fn event_histogram(records: &[TrajectoryRecord]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(event_label(r.event)).or_insert(0) += 1;
    }
    counts
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (label, scenario) = load_scenario()?;
    let Scenario { sim: config, population } = scenario;

    println!("=== levy_walk — rust_walk mobility framework ===");
    println!("Scenario: {label}");
    println!(
        "Walkers: {}  |  Ticks: {}  |  Seed: {}  |  Record every {} ticks",
        population.count, config.total_ticks, config.seed, config.record_interval_ticks
    );
    println!(
        "Velocity: {}  |  Policy: {:?}  |  Wait probability: {}",
        population.walker.velocity,
        population.walker.policy,
        population
            .walker
            .wait_probability
            .map_or_else(|| "-".to_string(), |p| p.to_string()),
    );
    println!();

    let mut sim = SimBuilder::new(config.clone())
        .populate(population.count, population.start, &population.walker)
        .build()?;
    let mut recorder = TrajectoryRecorder::new(&config);

    let t0 = Instant::now();
    sim.run(&mut recorder)?;
    let elapsed = t0.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "run complete");

    let records = recorder.into_records()?;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  trajectory records : {}", records.len());
    for (event, n) in event_histogram(&records) {
        println!("  {event:<18} : {n}");
    }
    println!();

    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>8} {:<10}",
        "Agent", "x", "y", "Traveled", "Trips", "Phase"
    );
    println!("{}", "-".repeat(68));
    for (i, walker) in sim.walkers().iter().enumerate() {
        let p = walker.position();
        println!(
            "{:<8} {:>12.3} {:>12.3} {:>12.3} {:>8} {:<10}",
            i,
            p.x,
            p.y,
            walker.state().distance_traveled(),
            walker.state().trips_started(),
            walker.phase().as_str(),
        );
    }

    Ok(())
}
