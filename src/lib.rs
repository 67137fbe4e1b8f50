pub mod configuration;
pub mod constants;
pub mod control;
pub mod errors;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use configuration::Configuration;
pub use control::flight_phase::{FlightPhase, PhaseController};
pub use control::guidance::GuidanceSystem;
pub use control::outcome::{LandingOutcome, LandingReport};
pub use control::vehicle::VehicleState;
pub use errors::SimulationError;
pub use simulation::{evaluate, initialize, is_terminated, step, Simulation, Snapshot};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::calculate_drag;
pub use trajectory_system::atmosphere::air_density;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
