// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field statistics consumed by the scoring model.
//!
//! A `FieldStats` is produced by the indexing/norm-computation stage for each
//! (document, field) pair and handed to the length-norm computation. It is
//! transient input: this crate never stores or mutates one.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - `overlap_count <= term_count` - overlap tokens are a subset of indexed
//!   tokens. Violating this upstream is a caller bug, not a recoverable state.
//! - `boost > 0` and finite - a zero or negative boost makes every norm
//!   collapse, which no scoring pipeline ever wants.
//!
//! Both are preconditions checked by `contracts::check_field_stats` in debug
//! builds only; the computation itself stays total.

use serde::{Deserialize, Serialize};

/// Statistics for one field instance of one document.
///
/// `term_count` counts every indexed token in the field; `overlap_count`
/// counts the subset occupying the same position as another token (synonym
/// expansion being the usual source). `boost` is the caller-assigned weight
/// multiplier folded into the returned norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Number of indexed tokens in the field instance.
    pub term_count: u32,
    /// Number of overlap (same-position) tokens. Must not exceed `term_count`.
    pub overlap_count: u32,
    /// Caller-assigned weight multiplier. Must be positive and finite.
    pub boost: f64,
}

impl FieldStats {
    /// Stats with a neutral boost of `1.0`.
    #[inline]
    pub fn new(term_count: u32, overlap_count: u32) -> Self {
        Self::with_boost(term_count, overlap_count, 1.0)
    }

    /// Stats with an explicit boost.
    #[inline]
    pub fn with_boost(term_count: u32, overlap_count: u32, boost: f64) -> Self {
        FieldStats {
            term_count,
            overlap_count,
            boost,
        }
    }

    /// Effective token count for length normalization.
    ///
    /// When overlaps are discounted, same-position tokens do not inflate the
    /// field length. Saturating so a violated `overlap_count <= term_count`
    /// precondition degrades to 0 in release builds instead of wrapping.
    #[inline]
    pub fn effective_count(&self, discount_overlaps: bool) -> u32 {
        if discount_overlaps {
            self.term_count.saturating_sub(self.overlap_count)
        } else {
            self.term_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_neutral_boost() {
        let stats = FieldStats::new(10, 2);
        assert_eq!(stats.term_count, 10);
        assert_eq!(stats.overlap_count, 2);
        assert!((stats.boost - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_count_discounts_overlaps() {
        let stats = FieldStats::new(10, 2);
        assert_eq!(stats.effective_count(true), 8);
        assert_eq!(stats.effective_count(false), 10);
    }

    #[test]
    fn effective_count_saturates_on_bad_input() {
        // Violated precondition: more overlaps than terms. Saturates to 0
        // rather than wrapping to u32::MAX.
        let stats = FieldStats::new(2, 10);
        assert_eq!(stats.effective_count(true), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let stats = FieldStats::with_boost(7, 1, 2.5);
        let json = serde_json::to_string(&stats).unwrap();
        let decoded: FieldStats = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, stats);
    }
}
