// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring invariants.
//!
//! Debug-mode assertions that verify the documented preconditions and
//! output bounds. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Never become part of the scoring contract itself - the computation
//!    entry points stay total functions
//!
//! # Usage
//!
//! ```ignore
//! use plateau::contracts::*;
//!
//! // In debug builds, this panics if overlap_count > term_count
//! check_field_stats(&stats);
//!
//! // In release builds, this is a no-op
//! ```

use crate::config::TfSaturation;
use crate::types::FieldStats;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the plateau identity holds.
/// This is evaluated at compile time - if it fails, the crate won't build.
const _: () = {
    // Integer model of the excess term: |n - l| + |n - h| - (h - l).
    const fn excess(n: i64, l: i64, h: i64) -> i64 {
        let a = if n >= l { n - l } else { l - n };
        let b = if n >= h { n - h } else { h - n };
        a + b - (h - l)
    }

    // INVARIANT: excess is 0 everywhere inside the plateau
    assert!(excess(1, 1, 1) == 0);
    assert!(excess(2, 2, 10) == 0);
    assert!(excess(6, 2, 10) == 0);
    assert!(excess(10, 2, 10) == 0);

    // INVARIANT: excess grows by 2 per step outside the plateau
    assert!(excess(0, 1, 1) == 2);
    assert!(excess(3, 1, 1) == 4);
    assert!(excess(12, 2, 10) == 4);

    // Even an inverted (l > h) range keeps the excess non-negative, so the
    // sqrt argument never drops below 1.
    assert!(excess(5, 10, 2) > 0);
};

// ============================================================================
// INPUT CONTRACTS
// ============================================================================

/// Check that field statistics satisfy their documented preconditions.
///
/// # Panics (debug builds only)
/// Panics if `overlap_count > term_count` or `boost` is not positive and
/// finite.
#[inline]
pub fn check_field_stats(stats: &FieldStats) {
    debug_assert!(
        stats.overlap_count <= stats.term_count,
        "Contract violation: overlap_count {} > term_count {}",
        stats.overlap_count,
        stats.term_count
    );
    debug_assert!(
        stats.boost.is_finite() && stats.boost > 0.0,
        "Contract violation: boost {} is not positive and finite",
        stats.boost
    );
}

// ============================================================================
// OUTPUT CONTRACTS
// ============================================================================

/// Check that a computed length norm stays within its bounds.
///
/// For a well-formed configuration (`min <= max`, `steepness >= 0`) the raw
/// norm lies in `(0, 1]`, so the boosted result lies in `(0, boost]`.
///
/// # Panics (debug builds only)
/// Panics if the norm escaped `(0, boost]` (allowing float slack).
#[inline]
pub fn check_norm_bounds(norm: f64, boost: f64) {
    debug_assert!(
        norm > 0.0,
        "Contract violation: length norm {} is not positive",
        norm
    );
    debug_assert!(
        norm <= boost * (1.0 + 1e-12),
        "Contract violation: length norm {} exceeds boost {}",
        norm,
        boost
    );
}

/// Check that a saturated term frequency stays within its curve's bounds.
///
/// Baseline output is non-negative; hyperbolic output lies in `[min, max]`
/// for positive frequencies (the non-finite clamp lands on `max`, which is
/// inside the range). Zero frequency short-circuits to 0 under both curves
/// and is exempt.
///
/// # Panics (debug builds only)
/// Panics if the result escaped the documented range.
#[inline]
pub fn check_saturation_bounds(tf: &TfSaturation, freq: f64, result: f64) {
    if freq == 0.0 {
        debug_assert!(
            result == 0.0,
            "Contract violation: zero frequency saturated to {}",
            result
        );
        return;
    }
    match tf {
        TfSaturation::Baseline(_) => {
            debug_assert!(
                result >= 0.0,
                "Contract violation: baseline tf {} is negative for freq {}",
                result,
                freq
            );
        }
        TfSaturation::Hyperbolic(cfg) => {
            debug_assert!(
                result >= cfg.min && result <= cfg.max,
                "Contract violation: hyperbolic tf {} escaped [{}, {}] for freq {}",
                result,
                cfg.min,
                cfg.max,
                freq
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaselineTf, HyperbolicTf};

    #[test]
    fn valid_stats_pass() {
        check_field_stats(&FieldStats::with_boost(10, 2, 1.5));
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn overlap_exceeding_terms_panics() {
        check_field_stats(&FieldStats::new(2, 10));
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn non_positive_boost_panics() {
        check_field_stats(&FieldStats::with_boost(10, 2, 0.0));
    }

    #[test]
    fn norm_within_bounds_passes() {
        check_norm_bounds(0.353, 1.0);
        check_norm_bounds(2.5, 2.5);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn norm_above_boost_panics() {
        check_norm_bounds(1.1, 1.0);
    }

    #[test]
    fn saturation_within_bounds_passes() {
        let baseline = TfSaturation::Baseline(BaselineTf::default());
        check_saturation_bounds(&baseline, 4.0, 2.0);

        let hyperbolic = TfSaturation::Hyperbolic(HyperbolicTf::default());
        check_saturation_bounds(&hyperbolic, 10.0, 1.0);
        check_saturation_bounds(&hyperbolic, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn hyperbolic_out_of_range_panics() {
        let hyperbolic = TfSaturation::Hyperbolic(HyperbolicTf::default());
        check_saturation_bounds(&hyperbolic, 10.0, 3.0);
    }
}
