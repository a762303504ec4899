use proptest::prelude::*;
use spl_core::constants::NEGLIGIBLE_DELTA_DB;
use spl_core::{combine, combine_all, correction_term};

fn level() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn combine_is_symmetric(a in level(), b in level()) {
        prop_assert_eq!(combine(a, b), combine(b, a));
    }

    #[test]
    fn combined_never_below_louder(a in level(), b in level()) {
        let step = combine(a, b);
        prop_assert!(step.delta_l >= 0.0);
        prop_assert!(step.l_plus >= 0.0);
        prop_assert!(
            step.combined >= a.max(b),
            "combine({}, {}) = {}",
            a,
            b,
            step.combined
        );
    }

    #[test]
    fn trace_has_one_step_per_merge(levels in prop::collection::vec(-200.0..200.0f64, 2..64)) {
        let result = combine_all(&levels).unwrap();
        prop_assert_eq!(result.trace.len(), levels.len() - 1);
        prop_assert_eq!(result.trace.last().map(|s| s.combined), Some(result.combined));
    }

    #[test]
    fn correction_strictly_decreasing_below_cutoff(
        a in 0.0..NEGLIGIBLE_DELTA_DB,
        b in 0.0..NEGLIGIBLE_DELTA_DB,
    ) {
        let (x, y) = (a.min(b), a.max(b));
        // Adjacent floats can round to the same correction.
        prop_assume!(y - x > 1e-6);
        prop_assert!(
            correction_term(x) > correction_term(y),
            "L+({}) = {} <= L+({}) = {}",
            x,
            correction_term(x),
            y,
            correction_term(y)
        );
    }

    #[test]
    fn correction_zero_from_cutoff(d in NEGLIGIBLE_DELTA_DB..1.0e9f64) {
        prop_assert_eq!(correction_term(d), 0.0);
    }
}
