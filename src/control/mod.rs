pub mod flight_phase;
pub mod guidance;
pub mod outcome;
pub mod vehicle;
