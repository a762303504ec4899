use crate::correction::correction_term;
use crate::CurveSample;

/// Sample the correction curve at `samples` evenly spaced level differences
/// from 0 to `max_delta` dB, both ends included.
pub fn sample_curve(max_delta: f64, samples: usize) -> Vec<CurveSample> {
    let step = if samples > 1 {
        max_delta / (samples - 1) as f64
    } else {
        0.0
    };

    (0..samples)
        .map(|i| {
            // Pin the last point so rounding cannot leave it just short of the cutoff.
            let delta_l = if i + 1 == samples && samples > 1 {
                max_delta
            } else {
                i as f64 * step
            };
            CurveSample {
                delta_l,
                l_plus: correction_term(delta_l),
            }
        })
        .collect()
}
