use crate::{
    configuration::Configuration, constants::LATERAL_DRIFT_FACTOR, control::vehicle::VehicleState,
    utils::vector2d::Vector2D,
};

use super::aerodynamics::calculate_drag;

/// Advances the vehicle by one fixed time step (explicit Euler).
pub fn step(state: &mut VehicleState, config: &Configuration) {
    if state.has_thrust() {
        powered_step(state, config);
    } else {
        free_fall_step(state, config);
    }
}

fn powered_step(state: &mut VehicleState, config: &Configuration) {
    let delta_time = config.time_step;

    let thrust = state.active_engines as f64 * config.max_thrust_per_engine;
    let total_mass = state.total_mass(config);
    let net_force = thrust - total_mass * config.gravity
        + calculate_drag(state.vertical_velocity, state.altitude, config);
    state.vertical_acceleration = net_force / total_mass;

    integrate_vertical(state, delta_time);

    // Lateral position couples to vertical speed, identically on both axes.
    let drift = state.vertical_velocity * LATERAL_DRIFT_FACTOR * delta_time;
    state.lateral += Vector2D::new(drift, drift);

    let fuel_consumed = state.active_engines as f64 * config.fuel_burn_rate * delta_time;
    state.fuel_mass -= fuel_consumed.min(state.fuel_mass);
    // Second stage deliberately left out of the stored mass.
    state.mass = config.empty_mass + state.fuel_mass;
}

fn free_fall_step(state: &mut VehicleState, config: &Configuration) {
    state.vertical_acceleration = -config.gravity
        + calculate_drag(state.vertical_velocity, state.altitude, config) / state.mass;
    integrate_vertical(state, config.time_step);
}

fn integrate_vertical(state: &mut VehicleState, delta_time: f64) {
    state.vertical_velocity += state.vertical_acceleration * delta_time;
    state.altitude += state.vertical_velocity * delta_time;
}
