//! outpost — one harvester working a scattered resource field under a
//! recurring hazard.
//!
//! ```text
//! cargo run -p outpost -- [config.json]
//! RUST_LOG=hv_behavior=debug cargo run -p outpost
//! ```

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hv_behavior::StateChange;
use hv_core::{SimRng, SimTime};
use hv_field::{FlatTerrain, ResourceField, ScatterSpawner};
use hv_hazard::HazardSignal;
use hv_output::{CsvWriter, TelemetryObserver, TelemetryWriter};
use hv_sim::{AgentSnapshot, SimBuilder, SimObserver};

use config::RunConfig;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs hazard banners and state changes, and forwards to an optional CSV
/// observer.
struct Console<W: TelemetryWriter> {
    inner:       Option<TelemetryObserver<W>>,
    transitions: u64,
}

impl<W: TelemetryWriter> SimObserver for Console<W> {
    fn on_hazard_signal(&mut self, signal: &HazardSignal) {
        info!(
            at = %signal.at,
            phase = %signal.phase,
            alert = signal.alert.label(),
            banner = signal.warning.unwrap_or(""),
            "hazard"
        );
        if let Some(inner) = self.inner.as_mut() {
            inner.on_hazard_signal(signal);
        }
    }

    fn on_state_change(&mut self, at: SimTime, change: &StateChange) {
        self.transitions += 1;
        info!(%at, machine = change.machine, from = change.from, to = change.to, "transition");
    }

    fn on_snapshot(&mut self, snapshot: &AgentSnapshot) {
        if let Some(inner) = self.inner.as_mut() {
            inner.on_snapshot(snapshot);
        }
    }

    fn on_sim_end(&mut self, clock: &hv_core::SimClock) {
        if let Some(inner) = self.inner.as_mut() {
            inner.on_sim_end(clock);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None => RunConfig::default(),
    };
    info!(
        seed = config.sim.seed,
        frames = config.sim.total_frames,
        frame_ms = config.sim.frame_ms,
        "configuration loaded"
    );

    // 1. Scatter the field from its own RNG stream.
    let mut field = ResourceField::new();
    let mut spawn_rng = SimRng::new(config.sim.seed).child(1);
    let placed = ScatterSpawner::new(config.scatter.clone())?
        .populate(&mut field, &mut spawn_rng, &FlatTerrain(0.0));
    info!(placed, total = field.total_remaining(), "resource field ready");

    // 2. Build the sim.
    let mut sim = SimBuilder::harvester(config.sim.clone(), config.harvester.clone(), config.hazard.clone())?
        .field(field)
        .build()?;

    // 3. Output.
    let inner = match &config.output_dir {
        Some(dir) => Some(TelemetryObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let mut obs = Console { inner, transitions: 0 };

    // 4. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.as_mut().and_then(|o| o.take_error()) {
        warn!(error = %e, "telemetry output failed");
    }

    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        sim_secs = sim.clock.now.as_secs_f32(),
        station = summary.station,
        health = summary.health,
        episodes = summary.hazard_episodes,
        transitions = obs.transitions,
        final_state = %summary.path,
        remaining = sim.field.total_remaining(),
        "run complete"
    );
    Ok(())
}
