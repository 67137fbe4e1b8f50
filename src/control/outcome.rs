use std::fmt;

use crate::configuration::Configuration;

use super::vehicle::VehicleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    Success,
    Miss,
}

/// Verdict at touchdown together with the miss distance (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingReport {
    pub outcome: LandingOutcome,
    pub distance: f64,
}

impl LandingReport {
    pub fn is_success(&self) -> bool {
        self.outcome == LandingOutcome::Success
    }
}

impl fmt::Display for LandingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            LandingOutcome::Success => write!(
                f,
                "Success! Landed on the tower. Distance to beacon: {:.2}m",
                self.distance
            ),
            LandingOutcome::Miss => write!(
                f,
                "Missed the tower. Distance to beacon: {:.2}m",
                self.distance
            ),
        }
    }
}

pub fn evaluate(state: &VehicleState, config: &Configuration) -> LandingReport {
    let distance = state.distance_to_beacon(config);
    let outcome = if distance <= config.landing_tolerance {
        LandingOutcome::Success
    } else {
        LandingOutcome::Miss
    };

    LandingReport { outcome, distance }
}
