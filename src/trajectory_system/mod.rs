pub mod aerodynamics;
pub mod atmosphere;
pub mod kinematics;
