// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Booster Constants
pub const MAX_THRUST_PER_ENGINE: f64 = 2_000_000.0; // N
pub const EMPTY_MASS: f64 = 120_000.0; // kg, first stage without propellant
pub const INITIAL_FUEL_MASS: f64 = 300_000.0; // kg
pub const SECOND_STAGE_MASS: f64 = 50_000.0; // kg
pub const FUEL_BURN_RATE: f64 = 250.0; // kg/s per engine
pub const TOTAL_ENGINES: u32 = 33;

// Aerodynamic Constants
pub const DRAG_COEFFICIENT: f64 = 0.5;
pub const CROSS_SECTIONAL_AREA: f64 = 10.0; // m²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const SCALE_HEIGHT: f64 = 8_500.0; // m

// Mission Parameters
pub const ORBITAL_HEIGHT: f64 = 80_000.0; // m
pub const ORBITAL_VELOCITY: f64 = 27_000.0; // m/s
pub const BEACON_X: f64 = 0.0; // m
pub const BEACON_Y: f64 = 0.0; // m
pub const LANDING_TOLERANCE: f64 = 0.1; // m
pub const START_X: f64 = -1_000.0; // m, 1 km off the beacon
pub const START_Y: f64 = -1_000.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_TICKS: u64 = 1_000_000;

// Lateral drift per unit of vertical velocity while under thrust
pub const LATERAL_DRIFT_FACTOR: f64 = 0.1;

// Guidance
pub const GUIDANCE_GAIN: f64 = 0.1;
pub const GUIDANCE_DEADBAND: f64 = 1.0; // m

// Below this altitude the landing burn drops to the minimum engine count
pub const LANDING_BURN_ALTITUDE: f64 = 100.0; // m
