//! Property tests for state formatting.

use entangle_hal::StateVector;
use entangle_viz::{AMPLITUDE_THRESHOLD, format_state};
use num_complex::Complex64;
use proptest::prelude::*;

/// Random normalized states of 2 to 5 qubits, some amplitudes forced to zero.
fn normalized_state() -> impl Strategy<Value = StateVector> {
    (2usize..=5).prop_flat_map(|n| {
        prop::collection::vec(
            (-1.0f64..1.0, -1.0f64..1.0, prop::bool::weighted(0.3)),
            1 << n,
        )
        .prop_filter_map("all-zero vector", move |parts| {
            let amps: Vec<Complex64> = parts
                .into_iter()
                .map(|(re, im, zero)| if zero { Complex64::new(0.0, 0.0) } else { Complex64::new(re, im) })
                .collect();
            let norm = amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
            if norm < 1e-6 {
                return None;
            }
            StateVector::new(n, amps.into_iter().map(|a| a / norm).collect()).ok()
        })
    })
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(state in normalized_state()) {
        let total: f64 = format_state(&state).iter().map(|r| r.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total = {}", total);
    }

    #[test]
    fn records_are_sorted_non_increasing(state in normalized_state()) {
        let records = format_state(&state);
        for pair in records.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn records_are_above_threshold_and_consistent(state in normalized_state()) {
        for r in format_state(&state) {
            prop_assert!(r.magnitude > AMPLITUDE_THRESHOLD);
            prop_assert_eq!(r.state.len(), state.num_qubits());
            prop_assert!((r.probability - r.magnitude * r.magnitude).abs() < 1e-15);
            let rebuilt = Complex64::from_polar(r.magnitude, r.phase);
            prop_assert!((rebuilt.re - r.amplitude_real).abs() < 1e-12);
            prop_assert!((rebuilt.im - r.amplitude_imag).abs() < 1e-12);
        }
    }
}

#[test]
fn bell_pair_formats_to_two_equal_records() {
    let h = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let records = format_state(&StateVector::new(2, vec![h, zero, zero, h]).unwrap());

    let states: Vec<_> = records.iter().map(|r| r.state.as_str()).collect();
    assert_eq!(states, vec!["00", "11"]);
    for r in &records {
        assert!((r.probability - 0.5).abs() < 1e-12);
        assert!((r.magnitude - 0.7071).abs() < 1e-4);
    }
}
