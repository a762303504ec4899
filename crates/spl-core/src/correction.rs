use crate::constants::NEGLIGIBLE_DELTA_DB;

/// Correction term L+ (dB) to add to the louder of two incoherent sources
/// separated by `delta_l` dB.
///
/// L+ = 10·log₁₀(1 + 10^(−ΔL/10)) for ΔL < 10 dB, and 0 from 10 dB upwards.
///
/// Defined for any real input; only `delta_l >= 0` is physically meaningful.
/// The log argument is always greater than one, so finite input never leaves
/// the domain.
pub fn correction_term(delta_l: f64) -> f64 {
    if delta_l >= NEGLIGIBLE_DELTA_DB {
        return 0.0;
    }
    10.0 * (1.0 + 10f64.powf(-delta_l / 10.0)).log10()
}
