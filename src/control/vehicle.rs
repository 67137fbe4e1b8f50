use crate::configuration::Configuration;
use crate::utils::vector2d::Vector2D;

/// Physical, propellant and engine state of the booster.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub vertical_velocity: f64,     // m/s
    pub vertical_acceleration: f64, // m/s²
    pub altitude: f64,              // m
    pub mass: f64,                  // kg, empty mass plus remaining fuel
    pub fuel_mass: f64,             // kg
    pub active_engines: u32,
    pub second_stage_attached: bool,
    pub lateral: Vector2D, // m, ground-plane position
}

impl VehicleState {
    /// A fully fuelled booster on the pad with every engine lit.
    pub fn new(config: &Configuration) -> Self {
        VehicleState {
            vertical_velocity: 0.0,
            vertical_acceleration: 0.0,
            altitude: 0.0,
            mass: config.empty_mass + config.initial_fuel_mass,
            fuel_mass: config.initial_fuel_mass,
            active_engines: config.total_engines,
            second_stage_attached: true,
            lateral: config.start_position(),
        }
    }

    pub fn has_thrust(&self) -> bool {
        self.fuel_mass > 0.0 && self.active_engines > 0
    }

    /// Mass the engines have to push: the stored mass plus the second stage
    /// while it is still attached.
    pub fn total_mass(&self, config: &Configuration) -> f64 {
        if self.second_stage_attached {
            self.mass + config.second_stage_mass
        } else {
            self.mass
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.altitude < 0.0
    }

    pub fn distance_to_beacon(&self, config: &Configuration) -> f64 {
        self.lateral.distance_to(config.beacon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let config = Configuration::default();
        let state = VehicleState::new(&config);

        assert_eq!(state.altitude, 0.0);
        assert_eq!(state.vertical_velocity, 0.0);
        assert_eq!(state.fuel_mass, 300_000.0);
        assert_eq!(state.mass, 420_000.0);
        assert_eq!(state.active_engines, 33);
        assert!(state.second_stage_attached);
        assert_eq!(state.lateral, Vector2D::new(-1_000.0, -1_000.0));
        assert!(state.has_thrust());
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_total_mass_includes_attached_second_stage() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        assert_eq!(state.total_mass(&config), 470_000.0);

        state.second_stage_attached = false;
        assert_eq!(state.total_mass(&config), 420_000.0);
    }

    #[test]
    fn test_no_thrust_without_fuel_or_engines() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);

        state.active_engines = 0;
        assert!(!state.has_thrust());

        state.active_engines = 3;
        state.fuel_mass = 0.0;
        assert!(!state.has_thrust());
    }

    #[test]
    fn test_distance_to_beacon() {
        let config = Configuration::default();
        let state = VehicleState::new(&config);
        assert_relative_eq!(
            state.distance_to_beacon(&config),
            1_000.0 * 2.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_termination_is_strictly_below_ground() {
        let config = Configuration::default();
        let mut state = VehicleState::new(&config);
        state.altitude = 0.0;
        assert!(!state.is_terminated());
        state.altitude = -0.001;
        assert!(state.is_terminated());
    }
}
