//! Tick-level entry points for a landing run.
//!
//! The free functions are the bare core: no validation, no bookkeeping.
//! [`Simulation`] wraps them with a validated configuration, elapsed time and
//! a bounded run loop for drivers.

use tracing::info;

use crate::{
    configuration::Configuration,
    control::{
        flight_phase::{FlightPhase, PhaseController},
        outcome::{self, LandingReport},
        vehicle::VehicleState,
    },
    errors::SimulationError,
    trajectory_system::kinematics,
    utils::vector2d::Vector2D,
};

pub fn initialize(config: &Configuration) -> (VehicleState, FlightPhase) {
    (VehicleState::new(config), FlightPhase::Launch)
}

/// One tick: integrate, then let the phase controller react to the new state.
/// A terminated run is left as it is.
pub fn step(state: &mut VehicleState, phase: FlightPhase, config: &Configuration) -> FlightPhase {
    if phase == FlightPhase::Terminated {
        return phase;
    }
    kinematics::step(state, config);
    PhaseController::default().advance(state, phase, config)
}

pub fn is_terminated(state: &VehicleState) -> bool {
    state.is_terminated()
}

pub fn evaluate(state: &VehicleState, config: &Configuration) -> LandingReport {
    outcome::evaluate(state, config)
}

/// Phase change that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: FlightPhase,
    pub to: FlightPhase,
}

/// State of the vehicle after a tick, as handed to reporting code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub elapsed_time: f64,
    pub phase: FlightPhase,
    pub altitude: f64,
    pub vertical_velocity: f64,
    pub vertical_acceleration: f64,
    pub fuel_mass: f64,
    pub mass: f64,
    pub active_engines: u32,
    pub second_stage_attached: bool,
    pub lateral: Vector2D,
    pub transition: Option<PhaseTransition>,
}

pub struct Simulation {
    config: Configuration,
    controller: PhaseController,
    state: VehicleState,
    phase: FlightPhase,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: Configuration) -> Result<Self, SimulationError> {
        config.validate()?;
        let (state, phase) = initialize(&config);
        Ok(Simulation {
            config,
            controller: PhaseController::default(),
            state,
            phase,
            ticks: 0,
        })
    }

    /// Starts from an arbitrary vehicle state and phase instead of the pad.
    pub fn from_state(
        config: Configuration,
        state: VehicleState,
        phase: FlightPhase,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        if state.active_engines > config.total_engines {
            return Err(SimulationError::ConfigurationError(format!(
                "active_engines {} exceeds total_engines {}",
                state.active_engines, config.total_engines
            )));
        }
        if !(state.fuel_mass >= 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "fuel_mass must not be negative, got {}",
                state.fuel_mass
            )));
        }
        Ok(Simulation {
            config,
            controller: PhaseController::default(),
            state,
            phase,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_time(&self) -> f64 {
        self.ticks as f64 * self.config.time_step
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == FlightPhase::Terminated
    }

    /// Advances one tick. Once the vehicle is below ground the phase becomes
    /// `Terminated` and further calls leave the state untouched.
    pub fn step(&mut self) -> Snapshot {
        let previous = self.phase;

        if previous != FlightPhase::Terminated {
            kinematics::step(&mut self.state, &self.config);
            self.phase = self
                .controller
                .advance(&mut self.state, self.phase, &self.config);
            if self.state.is_terminated() {
                self.phase = FlightPhase::Terminated;
                info!(
                    tick = self.ticks + 1,
                    velocity = self.state.vertical_velocity,
                    "Landing complete."
                );
            }
            self.ticks += 1;
        }

        let transition = (self.phase != previous).then_some(PhaseTransition {
            from: previous,
            to: self.phase,
        });
        self.snapshot(transition)
    }

    pub fn snapshot(&self, transition: Option<PhaseTransition>) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            elapsed_time: self.elapsed_time(),
            phase: self.phase,
            altitude: self.state.altitude,
            vertical_velocity: self.state.vertical_velocity,
            vertical_acceleration: self.state.vertical_acceleration,
            fuel_mass: self.state.fuel_mass,
            mass: self.state.mass,
            active_engines: self.state.active_engines,
            second_stage_attached: self.state.second_stage_attached,
            lateral: self.state.lateral,
            transition,
        }
    }

    pub fn outcome(&self) -> Result<LandingReport, SimulationError> {
        if !self.is_terminated() {
            return Err(SimulationError::NotTerminated);
        }
        Ok(evaluate(&self.state, &self.config))
    }

    /// Steps until touchdown, handing every snapshot to `observer`.
    pub fn run<F>(&mut self, max_ticks: u64, mut observer: F) -> Result<LandingReport, SimulationError>
    where
        F: FnMut(&Snapshot),
    {
        let mut remaining = max_ticks;
        while !self.is_terminated() {
            if remaining == 0 {
                return Err(SimulationError::TickLimitExceeded(self.ticks));
            }
            let snapshot = self.step();
            observer(&snapshot);
            remaining -= 1;
        }

        let report = self.outcome()?;
        info!(
            success = report.is_success(),
            distance = report.distance,
            "touchdown evaluated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initialize() {
        let config = Configuration::default();
        let (state, phase) = initialize(&config);
        assert_eq!(phase, FlightPhase::Launch);
        assert_eq!(state, VehicleState::new(&config));
    }

    #[test]
    fn test_free_step_matches_simulation_step() {
        let config = Configuration::default();
        let (mut state, mut phase) = initialize(&config);
        let mut simulation = Simulation::new(config.clone()).unwrap();

        for _ in 0..500 {
            phase = step(&mut state, phase, &config);
            simulation.step();
        }

        assert_eq!(simulation.state(), &state);
        assert_eq!(simulation.phase(), phase);
    }

    #[test]
    fn test_elapsed_time_tracks_ticks() {
        let mut simulation = Simulation::new(Configuration::default()).unwrap();
        for _ in 0..25 {
            simulation.step();
        }
        assert_eq!(simulation.ticks(), 25);
        assert_relative_eq!(simulation.elapsed_time(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let config = Configuration {
            time_step: -0.1,
            ..Configuration::default()
        };
        assert!(matches!(
            Simulation::new(config),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_outcome_before_touchdown() {
        let simulation = Simulation::new(Configuration::default()).unwrap();
        assert!(matches!(
            simulation.outcome(),
            Err(SimulationError::NotTerminated)
        ));
    }

    #[test]
    fn test_terminated_simulation_stops_stepping() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        state.altitude = 0.5;
        state.vertical_velocity = -20.0;
        state.fuel_mass = 0.0;
        state.mass = config.empty_mass;
        let mut simulation = Simulation::from_state(config, state, FlightPhase::Landing).unwrap();

        let snapshot = simulation.step();
        assert_eq!(snapshot.phase, FlightPhase::Terminated);
        assert_eq!(
            snapshot.transition,
            Some(PhaseTransition {
                from: FlightPhase::Landing,
                to: FlightPhase::Terminated
            })
        );

        let frozen = simulation.state().clone();
        let again = simulation.step();
        assert_eq!(simulation.state(), &frozen);
        assert_eq!(again.tick, 1);
        assert_eq!(again.transition, None);
    }

    #[test]
    fn test_free_step_leaves_terminated_state_alone() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        state.altitude = -0.3;
        state.vertical_velocity = -25.0;
        let before = state.clone();

        let phase = step(&mut state, FlightPhase::Terminated, &config);

        assert_eq!(phase, FlightPhase::Terminated);
        assert_eq!(state, before);
    }

    #[test]
    fn test_from_state_rejects_excess_engines() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        state.active_engines = config.total_engines + 1;

        match Simulation::from_state(config, state, FlightPhase::Landing) {
            Err(SimulationError::ConfigurationError(message)) => {
                assert!(message.contains("active_engines"))
            }
            _ => panic!("engine count above the total should be rejected"),
        }
    }

    #[test]
    fn test_from_state_rejects_negative_fuel() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        state.fuel_mass = -1.0;

        assert!(matches!(
            Simulation::from_state(config, state, FlightPhase::Launch),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_tick_limit() {
        let mut simulation = Simulation::new(Configuration::default()).unwrap();
        let mut seen = 0;
        let result = simulation.run(10, |_| seen += 1);
        assert!(matches!(result, Err(SimulationError::TickLimitExceeded(10))));
        assert_eq!(seen, 10);
    }
}
