use crate::configuration::Configuration;

/// Exponential atmosphere: density falls by a factor of e every scale height.
///
/// Not clamped below sea level, so a negative altitude yields a density above
/// the sea-level value.
pub fn air_density(altitude: f64, config: &Configuration) -> f64 {
    config.air_density_sea_level * (-altitude / config.scale_height).exp()
}
