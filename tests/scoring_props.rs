//! Scoring property tests against closed-form oracles.
//!
//! These tests verify the documented numeric properties of the public API:
//! - The plateau yields exactly `boost` for any in-range length
//! - Falloff outside the plateau is strictly monotone
//! - Baseline saturation is continuous at the knee and degenerates to sqrt
//! - Hyperbolic saturation is bounded and centered at its midpoint
//! - Match resolution: explicit status beats the value-based default

use plateau::{
    BaselineTf, Explanation, FieldStats, HyperbolicTf, LengthNorm, MatchStatus, TfSaturation,
};
use proptest::prelude::*;

// ============================================================================
// ORACLES
// ============================================================================

/// Oracle: the length-norm formula, written independently of the
/// implementation. Must match `LengthNorm::factor_with`.
fn oracle_norm(n: u32, min: u32, max: u32, steepness: f64, boost: f64) -> f64 {
    let n = f64::from(n);
    let (low, high) = (f64::from(min), f64::from(max));
    let excess = (n - low).abs() + (n - high).abs() - (high - low);
    boost / (steepness * excess + 1.0).sqrt()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: implementation agrees with the closed-form oracle for any
    /// well-formed configuration and input.
    #[test]
    fn prop_norm_matches_oracle(
        min in 0u32..64,
        width in 0u32..64,
        steepness in 0.0f64..4.0,
        boost in 0.1f64..8.0,
        term_count in 0u32..512,
        overlap in 0u32..512,
    ) {
        prop_assume!(overlap <= term_count);
        let max = min + width;
        let cfg = LengthNorm::with_overlaps(min, max, steepness, true);
        let got = cfg.factor(&FieldStats::with_boost(term_count, overlap, boost));
        let expected = oracle_norm(term_count - overlap, min, max, steepness, boost);
        prop_assert!(
            (got - expected).abs() < 1e-12,
            "term_count={} overlap={} plateau=[{}, {}]: got {}, oracle {}",
            term_count, overlap, min, max, got, expected
        );
    }

    /// Property: the override argument, not the configured flag, decides
    /// overlap handling.
    #[test]
    fn prop_override_beats_configured_flag(
        term_count in 1u32..512,
        overlap in 0u32..512,
        steepness in 0.01f64..4.0,
    ) {
        prop_assume!(overlap <= term_count);
        let cfg = LengthNorm::with_overlaps(1, 1, steepness, false);
        let discounted = cfg.factor_with(term_count, overlap, 1.0, true);
        let full = cfg.factor_with(term_count, overlap, 1.0, false);
        prop_assert!(
            (discounted - oracle_norm(term_count - overlap, 1, 1, steepness, 1.0)).abs() < 1e-12
        );
        prop_assert!((full - oracle_norm(term_count, 1, 1, steepness, 1.0)).abs() < 1e-12);
    }

    /// Property: baseline saturation with zero floor and zero knee is
    /// exactly sqrt.
    #[test]
    fn prop_baseline_degenerates_to_sqrt(freq in 0.0001f64..1e9) {
        let got = BaselineTf::new(0.0, 0.0).saturate(freq);
        prop_assert!((got - freq.sqrt()).abs() < 1e-9);
    }

    /// Property: baseline saturation never jumps at the knee. The two
    /// branches agree there by construction.
    #[test]
    fn prop_baseline_continuous_at_knee(
        base in 0.0f64..5.0,
        min_freq in 0.001f64..50.0,
    ) {
        let cfg = BaselineTf::new(base, min_freq);
        let floor = cfg.saturate(min_freq);
        let past = cfg.saturate(min_freq * (1.0 + 1e-12));
        prop_assert!((floor - past).abs() < 1e-5);
    }

    /// Property: baseline saturation is non-decreasing.
    #[test]
    fn prop_baseline_monotone(
        base in 0.0f64..5.0,
        min_freq in 0.0f64..50.0,
        f1 in 0.0f64..1e6,
        f2 in 0.0f64..1e6,
    ) {
        prop_assume!(f1 < f2);
        let cfg = BaselineTf::new(base, min_freq);
        prop_assert!(cfg.saturate(f1) <= cfg.saturate(f2) + 1e-12);
    }

    /// Property: hyperbolic output never leaves `[min, max]` for positive
    /// frequencies, overflow included.
    #[test]
    fn prop_hyperbolic_bounded(
        min in -4.0f64..4.0,
        width in 0.0f64..8.0,
        base in 1.001f64..4.0,
        xoffset in -1000.0f64..1000.0,
        freq in 0.0001f64..1e15,
    ) {
        let cfg = HyperbolicTf::new(min, min + width, base, xoffset);
        let got = cfg.saturate(freq);
        prop_assert!(got >= min - 1e-9 && got <= min + width + 1e-9);
    }

    /// Property: hyperbolic saturation is non-decreasing for base > 1.
    #[test]
    fn prop_hyperbolic_monotone(
        base in 1.01f64..3.0,
        xoffset in 0.0f64..100.0,
        f1 in 0.001f64..1e4,
        f2 in 0.001f64..1e4,
    ) {
        prop_assume!(f1 < f2);
        let cfg = HyperbolicTf::new(0.0, 2.0, base, xoffset);
        prop_assert!(cfg.saturate(f1) <= cfg.saturate(f2) + 1e-9);
    }

    /// Property: dispatch through the enum equals the direct call.
    #[test]
    fn prop_dispatch_is_transparent(freq in 0.0f64..1e6) {
        let baseline = BaselineTf::new(1.5, 5.0);
        let hyperbolic = HyperbolicTf::new(0.0, 2.0, 1.3, 10.0);
        prop_assert_eq!(
            TfSaturation::Baseline(baseline).saturate(freq),
            baseline.saturate(freq)
        );
        prop_assert_eq!(
            TfSaturation::Hyperbolic(hyperbolic).saturate(freq),
            hyperbolic.saturate(freq)
        );
    }

    /// Property: match resolution. Explicit status always wins; unspecified
    /// follows the sign of the value.
    #[test]
    fn prop_match_resolution(value in -1e9f64..1e9) {
        prop_assert_eq!(Explanation::new(value, "n").is_match(), value > 0.0);
        prop_assert!(
            Explanation::new(value, "n")
                .with_status(MatchStatus::Matched)
                .is_match()
        );
        prop_assert!(
            !Explanation::new(value, "n")
                .with_status(MatchStatus::NotMatched)
                .is_match()
        );
    }
}

// ============================================================================
// PINNED VALUES
// ============================================================================

#[test]
fn pinned_worked_examples() {
    // Plateau [1, 1], steepness 0.5, overlaps discounted:
    // term_count=10, overlap=2 -> n=8 -> 1/sqrt(0.5*(7+7-0)+1) = 1/sqrt(8).
    let cfg = LengthNorm::with_overlaps(1, 1, 0.5, true);
    let norm = cfg.factor(&FieldStats::new(10, 2));
    assert!((norm - 1.0 / 8.0_f64.sqrt()).abs() < 1e-12);

    // Hyperbolic (0, 2, 1.3, 10) at freq=10: x=0, midpoint 1.0.
    let tf = HyperbolicTf::new(0.0, 2.0, 1.3, 10.0);
    assert!((tf.saturate(10.0) - 1.0).abs() < 1e-12);
}

#[test]
fn pinned_zero_frequency_short_circuits() {
    // Exactly zero - not "close to zero" - under both curves, regardless of
    // floors or minimums that would otherwise apply.
    assert_eq!(BaselineTf::new(1.5, 5.0).saturate(0.0), 0.0);
    assert_eq!(HyperbolicTf::new(0.5, 2.0, 1.3, 10.0).saturate(0.0), 0.0);
}

#[test]
fn pinned_overflow_clamps_to_max_only() {
    let cfg = HyperbolicTf::new(0.5, 2.0, 1.3, 10.0);
    // Positive overflow: clamped to max.
    assert_eq!(cfg.saturate(1e8), 2.0);
    // Negative overflow: also lands on max, never min. Asymmetric on
    // purpose - this matches the long-standing observable behavior.
    let far_below = HyperbolicTf::new(0.5, 2.0, 1.3, 1e8);
    assert_eq!(far_below.saturate(1.0), 2.0);
}
