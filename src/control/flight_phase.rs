use std::fmt;

use tracing::{debug, info};

use crate::configuration::Configuration;
use crate::constants::LANDING_BURN_ALTITUDE;

use super::{guidance::GuidanceSystem, vehicle::VehicleState};

/// Flight phases in the order they are flown. Ordering follows declaration,
/// and a run never moves back to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlightPhase {
    Launch,
    Boostback,
    Landing,
    Terminated,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightPhase::Launch => "launch",
            FlightPhase::Boostback => "boostback",
            FlightPhase::Landing => "landing",
            FlightPhase::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Engine-count policy and phase transitions, applied once per tick after
/// the integrator has run.
#[derive(Default)]
pub struct PhaseController {
    pub guidance: GuidanceSystem,
}

impl PhaseController {
    pub fn new(guidance: GuidanceSystem) -> Self {
        PhaseController { guidance }
    }

    pub fn advance(
        &self,
        state: &mut VehicleState,
        phase: FlightPhase,
        config: &Configuration,
    ) -> FlightPhase {
        match phase {
            FlightPhase::Launch => {
                if state.altitude > config.orbital_height
                    || state.vertical_velocity > config.orbital_velocity
                {
                    state.second_stage_attached = false;
                    info!(
                        altitude = state.altitude,
                        velocity = state.vertical_velocity,
                        "Separating second stage..."
                    );
                    FlightPhase::Boostback
                } else {
                    FlightPhase::Launch
                }
            }

            FlightPhase::Boostback => {
                set_active_engines(state, config.total_engines / 3);
                if state.vertical_velocity <= 0.0 {
                    info!(altitude = state.altitude, "Reorienting for landing...");
                    FlightPhase::Landing
                } else {
                    FlightPhase::Boostback
                }
            }

            FlightPhase::Landing => {
                let engines = if state.altitude > LANDING_BURN_ALTITUDE {
                    config.total_engines / 10
                } else {
                    (config.total_engines / 15).max(1)
                };
                set_active_engines(state, engines);
                self.guidance.correct(&mut state.lateral, config);
                FlightPhase::Landing
            }

            // Touchdown is detected by the caller, nothing left to control.
            FlightPhase::Terminated => FlightPhase::Terminated,
        }
    }
}

fn set_active_engines(state: &mut VehicleState, engines: u32) {
    if state.active_engines != engines {
        debug!(
            from = state.active_engines,
            to = engines,
            "active engine count changed"
        );
    }
    state.active_engines = engines;
}
