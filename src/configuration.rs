use crate::constants::*;
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

/// Parameters of a single landing run. Fixed once the run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub gravity: f64,
    pub max_thrust_per_engine: f64,
    pub empty_mass: f64,
    pub initial_fuel_mass: f64,
    pub second_stage_mass: f64,
    pub fuel_burn_rate: f64,
    pub total_engines: u32,
    pub time_step: f64,
    pub orbital_height: f64,
    pub orbital_velocity: f64,
    pub beacon_x: f64,
    pub beacon_y: f64,
    pub landing_tolerance: f64,
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
    pub air_density_sea_level: f64,
    pub scale_height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            gravity: GRAVITY,
            max_thrust_per_engine: MAX_THRUST_PER_ENGINE,
            empty_mass: EMPTY_MASS,
            initial_fuel_mass: INITIAL_FUEL_MASS,
            second_stage_mass: SECOND_STAGE_MASS,
            fuel_burn_rate: FUEL_BURN_RATE,
            total_engines: TOTAL_ENGINES,
            time_step: TIME_STEP,
            orbital_height: ORBITAL_HEIGHT,
            orbital_velocity: ORBITAL_VELOCITY,
            beacon_x: BEACON_X,
            beacon_y: BEACON_Y,
            landing_tolerance: LANDING_TOLERANCE,
            drag_coefficient: DRAG_COEFFICIENT,
            cross_sectional_area: CROSS_SECTIONAL_AREA,
            air_density_sea_level: AIR_DENSITY_SEA_LEVEL,
            scale_height: SCALE_HEIGHT,
            start_x: START_X,
            start_y: START_Y,
        }
    }
}

impl Configuration {
    pub fn beacon(&self) -> Vector2D {
        Vector2D::new(self.beacon_x, self.beacon_y)
    }

    pub fn start_position(&self) -> Vector2D {
        Vector2D::new(self.start_x, self.start_y)
    }

    /// Rejects parameter sets that would divide by zero or burn negative fuel.
    ///
    /// The stepping functions never call this; `Simulation::new` does.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let must_be_positive = [
            ("time_step", self.time_step),
            ("empty_mass", self.empty_mass),
            ("scale_height", self.scale_height),
        ];
        for (name, value) in must_be_positive {
            if !(value > 0.0) {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let must_be_non_negative = [
            ("initial_fuel_mass", self.initial_fuel_mass),
            ("second_stage_mass", self.second_stage_mass),
            ("fuel_burn_rate", self.fuel_burn_rate),
            ("max_thrust_per_engine", self.max_thrust_per_engine),
            ("landing_tolerance", self.landing_tolerance),
            ("drag_coefficient", self.drag_coefficient),
            ("cross_sectional_area", self.cross_sectional_area),
            ("air_density_sea_level", self.air_density_sea_level),
        ];
        for (name, value) in must_be_non_negative {
            if !(value >= 0.0) {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
