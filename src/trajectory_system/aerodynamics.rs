use crate::configuration::Configuration;

use super::atmosphere::air_density;

pub fn calculate_dynamic_pressure(velocity: f64, altitude: f64, config: &Configuration) -> f64 {
    0.5 * air_density(altitude, config) * velocity.powi(2)
}

/// Vertical drag force (N).
///
/// Negative while climbing, positive (or zero) otherwise, so it always opposes
/// the vertical velocity.
pub fn calculate_drag(velocity: f64, altitude: f64, config: &Configuration) -> f64 {
    let drag_magnitude = config.drag_coefficient
        * calculate_dynamic_pressure(velocity, altitude, config)
        * config.cross_sectional_area;

    if velocity > 0.0 {
        -drag_magnitude
    } else {
        drag_magnitude
    }
}
