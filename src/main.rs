use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use orbits::{Orbit, Scenario};

/// Samples the orbit a body is on from its initial state vectors.
///
/// Prints one line per step: time, distance to the parent, position.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML scenario; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    steps: Option<u32>,

    /// Seconds between samples
    #[arg(long)]
    time_step: Option<f64>,

    /// Newton iterations per Kepler solve
    #[arg(long)]
    iterations: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario = match &args.config {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Scenario::default(),
    };
    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }
    if let Some(time_step) = args.time_step {
        scenario.time_step = time_step;
    }
    if let Some(iterations) = args.iterations {
        scenario.solver_iterations = iterations;
    }
    scenario.validate()?;

    let mut orbit = Orbit::from_state_vectors(scenario.parent_mass, scenario.position, scenario.velocity);
    if let Err(err) = orbit.validate() {
        log::warn!("{}, positions will not be meaningful", err);
    }
    log::info!(
        "a={} e={} i={} period={}s",
        orbit.semi_major_axis,
        orbit.eccentricity,
        orbit.inclination,
        orbit.period()
    );

    let mut time = 0.0;
    for _ in 0..scenario.steps {
        orbit.evaluate_true_anomaly(time, scenario.solver_iterations);
        let (position, _) = orbit.to_local_state_vectors();
        println!(
            "{} {} {} {} {}",
            time,
            position.magnitude(),
            position.x,
            position.y,
            position.z
        );
        time += scenario.time_step;
    }

    Ok(())
}
