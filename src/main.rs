use std::{env, thread, time::Duration};

use booster_landing::{constants::MAX_SIMULATION_TICKS, *};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("booster_landing=info".parse()?))
        .init();

    // Real-time playback: print every tick as it happens, paced at one time step.
    let playback = env::var_os("BOOSTER_PLAYBACK").is_some();

    let config = Configuration::default();
    let pacing = Duration::from_secs_f64(config.time_step);
    let mut simulation = Simulation::new(config)?;
    let mut telemetry = Telemetry::new();

    tracing::info!(playback, "Starting booster landing simulation");

    let result = simulation.run(MAX_SIMULATION_TICKS, |snapshot| {
        telemetry.collect_data(snapshot);
        if playback {
            if let Some(message) = snapshot
                .transition
                .as_ref()
                .and_then(Telemetry::describe_transition)
            {
                println!("{}", message);
            }
            println!("{}", Telemetry::format_status_line(snapshot));
            thread::sleep(pacing);
        }
    });

    match result {
        Ok(report) => {
            if playback {
                println!("{}", telemetry.summary(Some(&report)));
            } else {
                telemetry.display_data(Some(&report));
            }
        }
        Err(e) => {
            println!("Error during simulation: {}", e);
            telemetry.display_data(None);
            return Err(e.into());
        }
    }

    Ok(())
}
