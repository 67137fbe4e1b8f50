use tracing::debug;

use crate::configuration::Configuration;
use crate::constants::{GUIDANCE_DEADBAND, GUIDANCE_GAIN};
use crate::utils::vector2d::Vector2D;

/// Proportional lateral steering toward the beacon.
///
/// One correction per call, no integral or derivative term. Inside the
/// deadband the position is left alone.
pub struct GuidanceSystem {
    pub gain: f64,
    pub deadband: f64,
}

impl Default for GuidanceSystem {
    fn default() -> Self {
        GuidanceSystem::new(GUIDANCE_GAIN, GUIDANCE_DEADBAND)
    }
}

impl GuidanceSystem {
    pub fn new(gain: f64, deadband: f64) -> Self {
        GuidanceSystem { gain, deadband }
    }

    /// Returns true when a correction was applied.
    pub fn correct(&self, lateral: &mut Vector2D, config: &Configuration) -> bool {
        let beacon = config.beacon();
        let distance = lateral.distance_to(beacon);
        if distance <= self.deadband {
            return false;
        }

        let error = *lateral - beacon;
        *lateral += -self.gain * error;
        debug!(
            distance,
            x = lateral.x,
            y = lateral.y,
            "guidance correction toward beacon"
        );
        true
    }
}
