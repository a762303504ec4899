/// Level gap (dB) at and above which the quieter source is treated as
/// negligible and contributes no correction.
pub const NEGLIGIBLE_DELTA_DB: f64 = 10.0;

/// Upper end of the ΔL axis when sampling the correction curve.
pub const DEFAULT_CURVE_MAX_DELTA_DB: f64 = 10.0;

/// Number of points sampled over the correction curve.
pub const DEFAULT_CURVE_SAMPLES: usize = 100;

/// Correction for two sources of equal level, 10·log₁₀(2) dB.
pub fn equal_level_correction() -> f64 {
    10.0 * 2f64.log10()
}

/// Intensity ratio (linear energy) of a level in dB, 10^(L/10).
pub fn db_to_energy(level_db: f64) -> f64 {
    10f64.powf(level_db / 10.0)
}

/// Level in dB of an intensity ratio, 10·log₁₀(E).
pub fn energy_to_db(energy: f64) -> f64 {
    10.0 * energy.log10()
}
