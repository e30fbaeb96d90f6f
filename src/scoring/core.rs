// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind the scoring model.
//!
//! Two independent pieces, composed by the ranking pipeline:
//!
//! 1. **Length norm** - a per-field multiplier that is exactly 1.0 inside
//!    the configured plateau and decays as `1/sqrt(distance)` outside it.
//! 2. **Term-frequency saturation** - maps raw occurrence counts to a
//!    sub-linear (baseline) or bounded (hyperbolic) contribution so that
//!    repeating a term cannot inflate a score without limit.
//!
//! # Why the plateau formula works
//!
//! For an effective length `n` and plateau `[l, h]`, the excess term is
//!
//! ```text
//! |n - l| + |n - h| - (h - l)
//! ```
//!
//! Inside the plateau the two absolute values sum to exactly `h - l`, so the
//! excess is 0 and the norm is `1/sqrt(0 + 1) = 1`. Outside, the excess
//! grows by 2 per step away from the nearer boundary, giving the familiar
//! `1/sqrt(x)` decay. With `l = h = 1` and steepness `0.5` this reproduces
//! the classic single-point norm exactly. The identity is also checked at
//! compile time in `contracts`.
//!
//! Everything here is a total function: no error paths, no NaN escapes
//! (the one overflow case in the hyperbolic curve is clamped), no state
//! beyond the immutable configuration.

use serde::{Deserialize, Serialize};

use crate::config::{BaselineTf, HyperbolicTf, LengthNorm, TfSaturation};
use crate::contracts;
use crate::explain::Explanation;
use crate::types::FieldStats;

// =============================================================================
// LENGTH NORM
// =============================================================================

impl LengthNorm {
    /// Length-normalization factor for one field instance.
    ///
    /// Returns `stats.boost` exactly when the effective token count lands
    /// inside the plateau, and strictly less the further it lands outside.
    pub fn factor(&self, stats: &FieldStats) -> f64 {
        contracts::check_field_stats(stats);
        self.factor_with(
            stats.term_count,
            stats.overlap_count,
            stats.boost,
            self.discount_overlaps,
        )
    }

    /// Length-normalization factor with an explicit overlap-handling
    /// override, for callers that decide per-field whether overlaps count.
    pub fn factor_with(
        &self,
        term_count: u32,
        overlap_count: u32,
        boost: f64,
        discount_overlaps: bool,
    ) -> f64 {
        let n = if discount_overlaps {
            i64::from(term_count.saturating_sub(overlap_count))
        } else {
            i64::from(term_count)
        };
        let low = i64::from(self.min);
        let high = i64::from(self.max);

        // 0 inside the plateau; grows by 2 per step outside. Never negative,
        // even for an inverted (min > max) range, so the sqrt argument stays
        // >= 1 and the norm stays in (0, 1].
        let excess = (n - low).abs() + (n - high).abs() - (high - low);

        let norm = 1.0 / (self.steepness * excess as f64 + 1.0).sqrt();
        let result = boost * norm;
        contracts::check_norm_bounds(result, boost);
        result
    }
}

/// Norm factors for a batch of field instances, in input order.
///
/// The indexing-time norm pass calls this once per field over the whole
/// collection.
pub fn length_norms(config: &LengthNorm, stats: &[FieldStats]) -> Vec<f64> {
    stats.iter().map(|s| config.factor(s)).collect()
}

/// Parallel variant of [`length_norms`] for large collections.
///
/// Identical output, rayon-chunked. The computation is pure, so the only
/// coordination is the join.
#[cfg(feature = "parallel")]
pub fn length_norms_parallel(config: &LengthNorm, stats: &[FieldStats]) -> Vec<f64> {
    use rayon::prelude::*;

    stats.par_iter().map(|s| config.factor(s)).collect()
}

// =============================================================================
// TERM-FREQUENCY SATURATION
// =============================================================================

impl BaselineTf {
    /// Saturated contribution for a raw term frequency.
    ///
    /// Zero frequency returns 0 exactly - the short-circuit runs before the
    /// floor check, so a floor with `min_freq > 0` never resurrects a term
    /// that did not occur. Frequencies at or below the knee return `base`;
    /// above it, `sqrt(freq + base^2 - min_freq)`, which equals `base` at
    /// the knee. No discontinuities, no error cases.
    pub fn saturate(&self, freq: f64) -> f64 {
        if freq == 0.0 {
            return 0.0;
        }
        if freq <= self.min_freq {
            self.base
        } else {
            (freq + self.base * self.base - self.min_freq).sqrt()
        }
    }
}

impl HyperbolicTf {
    /// Saturated contribution for a raw term frequency, bounded in
    /// `[min, max]`.
    ///
    /// Zero frequency returns 0 exactly, even when `min > 0`. Otherwise the
    /// result follows a tanh-shaped S-curve centered at `xoffset`:
    /// `min + (max - min)/2 * (tanh_base(freq - xoffset) + 1)`.
    ///
    /// Extreme exponents overflow `base^x` to infinity and the quotient to
    /// NaN; that case is clamped to `max` - and only to `max`, never `min`,
    /// including when the overflowing exponent is large and *negative*. The
    /// asymmetry is long-standing observable behavior and is kept as is.
    pub fn saturate(&self, freq: f64) -> f64 {
        if freq == 0.0 {
            return 0.0;
        }
        let x = freq - self.xoffset;
        let result = self.min + (self.max - self.min) / 2.0 * (tanh_base(x, self.base) + 1.0);
        if result.is_finite() {
            result
        } else {
            self.max
        }
    }
}

/// Hyperbolic tangent generalized to an arbitrary exponent base:
/// `(b^x - b^-x) / (b^x + b^-x)`.
///
/// In `[-1, 1]` for all finite output; NaN when both powers overflow
/// (`inf/inf`), which the caller clamps.
fn tanh_base(x: f64, base: f64) -> f64 {
    let up = base.powf(x);
    let down = base.powf(-x);
    (up - down) / (up + down)
}

impl TfSaturation {
    /// Saturated contribution under whichever curve is configured.
    pub fn saturate(&self, freq: f64) -> f64 {
        match self {
            TfSaturation::Baseline(cfg) => cfg.saturate(freq),
            TfSaturation::Hyperbolic(cfg) => cfg.saturate(freq),
        }
    }
}

// =============================================================================
// THE MODEL
// =============================================================================

/// The capability a ranking pipeline scores through.
///
/// Implementations must be pure functions of their configuration and
/// arguments; the `Send + Sync` bound is what lets the pipeline share one
/// model across every scoring thread without locks.
pub trait SimilarityModel: Send + Sync {
    /// Length-normalization factor for one field instance.
    fn length_norm(&self, stats: &FieldStats) -> f64;

    /// Saturated term-frequency contribution.
    fn term_frequency(&self, freq: f64) -> f64;
}

/// Plateau length normalization plus a configurable saturation curve.
///
/// Configuration is fixed at construction; build a new model to change it.
/// A model is `Copy` and trivially shareable - every method is a handful of
/// floating-point operations over immutable data.
///
/// # Example
///
/// ```
/// use plateau::{FieldStats, LengthNorm, PlateauSimilarity, SimilarityModel};
///
/// let model = PlateauSimilarity::builder()
///     .length_norm(LengthNorm::new(2, 10, 0.5))
///     .build();
///
/// // 6 tokens: inside the plateau, no penalty.
/// assert_eq!(model.length_norm(&FieldStats::new(6, 0)), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlateauSimilarity {
    length_norm: LengthNorm,
    tf: TfSaturation,
}

impl PlateauSimilarity {
    /// Start building a model. Unset pieces keep their defaults.
    pub fn builder() -> PlateauSimilarityBuilder {
        PlateauSimilarityBuilder::default()
    }

    /// The length-norm configuration this model scores with.
    pub fn length_norm_config(&self) -> &LengthNorm {
        &self.length_norm
    }

    /// The saturation curve this model scores with.
    pub fn tf_saturation(&self) -> &TfSaturation {
        &self.tf
    }

    /// Length norm with an explicit overlap-handling override.
    pub fn length_norm_with(
        &self,
        term_count: u32,
        overlap_count: u32,
        boost: f64,
        discount_overlaps: bool,
    ) -> f64 {
        self.length_norm
            .factor_with(term_count, overlap_count, boost, discount_overlaps)
    }

    /// Explanation tree mirroring the length-norm arithmetic.
    ///
    /// The root value equals `length_norm(stats)`; children decompose it
    /// into the raw norm and the boost.
    pub fn explain_length_norm(&self, stats: &FieldStats) -> Explanation {
        let n = stats.effective_count(self.length_norm.discount_overlaps);
        let raw = self.length_norm.factor_with(
            stats.term_count,
            stats.overlap_count,
            1.0,
            self.length_norm.discount_overlaps,
        );
        let mut root = Explanation::new(
            self.length_norm.factor(stats),
            format!(
                "length norm, plateau [{}, {}], steepness {}",
                self.length_norm.min, self.length_norm.max, self.length_norm.steepness
            ),
        );
        root.push(
            Explanation::new(raw, format!("raw norm for effective length {n}")).with_detail(
                Explanation::new(
                    f64::from(n),
                    if self.length_norm.discount_overlaps {
                        "effective field length (overlaps discounted)".to_string()
                    } else {
                        "effective field length".to_string()
                    },
                ),
            ),
        );
        root.push(Explanation::new(stats.boost, "field boost".to_string()));
        root
    }

    /// Explanation tree mirroring the term-frequency arithmetic.
    pub fn explain_term_frequency(&self, freq: f64) -> Explanation {
        let value = self.tf.saturate(freq);
        let description = match self.tf {
            TfSaturation::Baseline(cfg) => format!(
                "baseline tf, floor {} through frequency {}",
                cfg.base, cfg.min_freq
            ),
            TfSaturation::Hyperbolic(cfg) => format!(
                "hyperbolic tf, bounded [{}, {}], midpoint at {}",
                cfg.min, cfg.max, cfg.xoffset
            ),
        };
        let mut root = Explanation::new(value, description);
        root.push(Explanation::new(freq, "raw term frequency".to_string()));
        root
    }
}

impl SimilarityModel for PlateauSimilarity {
    fn length_norm(&self, stats: &FieldStats) -> f64 {
        self.length_norm.factor(stats)
    }

    fn term_frequency(&self, freq: f64) -> f64 {
        let result = self.tf.saturate(freq);
        contracts::check_saturation_bounds(&self.tf, freq, result);
        result
    }
}

/// Builder for [`PlateauSimilarity`].
///
/// Each method replaces one configuration piece wholesale; the last call
/// for a given piece wins. `build` is infallible - there is nothing to
/// validate that the formulas do not already tolerate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateauSimilarityBuilder {
    length_norm: LengthNorm,
    tf: TfSaturation,
}

impl PlateauSimilarityBuilder {
    /// Set the length-norm plateau configuration.
    pub fn length_norm(mut self, config: LengthNorm) -> Self {
        self.length_norm = config;
        self
    }

    /// Score term frequency with the baseline (floor + sqrt) curve.
    pub fn baseline_tf(mut self, config: BaselineTf) -> Self {
        self.tf = TfSaturation::Baseline(config);
        self
    }

    /// Score term frequency with the bounded hyperbolic curve.
    pub fn hyperbolic_tf(mut self, config: HyperbolicTf) -> Self {
        self.tf = TfSaturation::Hyperbolic(config);
        self
    }

    /// Finish, yielding an immutable model.
    pub fn build(self) -> PlateauSimilarity {
        PlateauSimilarity {
            length_norm: self.length_norm,
            tf: self.tf,
        }
    }
}
