// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring configuration as immutable values.
//!
//! Every knob the model exposes lives in one of three plain value types,
//! built once and injected into the model at construction. There are no
//! setters: "reconfiguring" means building a new model, which is what makes
//! concurrent scoring trivially safe (nothing to race on).
//!
//! # The knobs
//!
//! | Type           | Controls                         | Default            |
//! |----------------|----------------------------------|--------------------|
//! | `LengthNorm`   | Plateau bounds, falloff, overlaps| `[1, 1]`, s = 0.5  |
//! | `BaselineTf`   | Floor region of the sqrt curve   | base 0, knee 0     |
//! | `HyperbolicTf` | Bounded S-curve range and center | `[0, 2]`, mid @ 10 |
//!
//! # Invalid configuration
//!
//! `min > max` (either the plateau or the hyperbolic range) is not validated.
//! The formulas stay deterministic - you get a semantically inverted curve,
//! not a panic or an error. Keeping the ranges ordered is the caller's
//! contract.

use serde::{Deserialize, Serialize};

/// Length-normalization parameters: the plateau and its falloff.
///
/// Fields whose effective token count lands inside `[min, max]` receive a
/// norm of exactly `1.0` (times boost); outside, the norm decays with
/// distance from the nearer boundary at a rate set by `steepness`.
/// `steepness = 0` disables normalization entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthNorm {
    /// Lower plateau bound (inclusive).
    pub min: u32,
    /// Upper plateau bound (inclusive). Keep `min <= max`.
    pub max: u32,
    /// Falloff rate outside the plateau. Non-negative.
    pub steepness: f64,
    /// Exclude overlap (same-position) tokens from the field length.
    pub discount_overlaps: bool,
}

impl LengthNorm {
    /// A plateau over `[min, max]` with the given falloff, discounting
    /// overlaps.
    pub fn new(min: u32, max: u32, steepness: f64) -> Self {
        LengthNorm {
            min,
            max,
            steepness,
            discount_overlaps: true,
        }
    }

    /// Same plateau, explicit overlap handling.
    pub fn with_overlaps(min: u32, max: u32, steepness: f64, discount_overlaps: bool) -> Self {
        LengthNorm {
            min,
            max,
            steepness,
            discount_overlaps,
        }
    }
}

impl Default for LengthNorm {
    /// Single-point plateau at 1 with steepness 0.5: the classic
    /// `1/sqrt(length)` decay.
    fn default() -> Self {
        LengthNorm::new(1, 1, 0.5)
    }
}

/// Baseline term-frequency saturation: a flat floor, then `sqrt`.
///
/// Frequencies at or below `min_freq` all score `base`; above the knee the
/// curve is `sqrt(freq + base^2 - min_freq)`, which meets the floor exactly
/// at the knee. With both parameters zero this is plain `sqrt(freq)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineTf {
    /// Value of the flat floor region. Non-negative.
    pub base: f64,
    /// Frequency at which the floor ends and the sqrt curve begins.
    pub min_freq: f64,
}

impl BaselineTf {
    pub fn new(base: f64, min_freq: f64) -> Self {
        BaselineTf { base, min_freq }
    }
}

impl Default for BaselineTf {
    /// No floor: plain `sqrt(freq)`.
    fn default() -> Self {
        BaselineTf::new(0.0, 0.0)
    }
}

/// Hyperbolic term-frequency saturation: a bounded S-curve.
///
/// Output sweeps from `min` to `max` along a tanh-shaped curve whose base is
/// `base` (rather than Euler's number) and whose midpoint sits at
/// `freq = xoffset`. `base > 1` makes the curve monotonically non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperbolicTf {
    /// Lower output bound.
    pub min: f64,
    /// Upper output bound. Keep `min <= max`.
    pub max: f64,
    /// Exponent base of the S-curve. Must exceed 1 for monotonicity.
    pub base: f64,
    /// Frequency at which the curve crosses its midpoint `(min + max) / 2`.
    pub xoffset: f64,
}

impl HyperbolicTf {
    pub fn new(min: f64, max: f64, base: f64, xoffset: f64) -> Self {
        HyperbolicTf {
            min,
            max,
            base,
            xoffset,
        }
    }
}

impl Default for HyperbolicTf {
    /// Output in `[0, 2]`, midpoint at frequency 10, gentle base of 1.3.
    fn default() -> Self {
        HyperbolicTf::new(0.0, 2.0, 1.3, 10.0)
    }
}

/// The term-frequency curve a model scores with.
///
/// The two curves are interchangeable: the ranking pipeline calls
/// `saturate` and never needs to know which is configured. Keeping the
/// choice a tagged variant (rather than a boxed closure) keeps models
/// `Copy`, comparable, and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TfSaturation {
    /// Flat floor, then unbounded `sqrt` growth.
    Baseline(BaselineTf),
    /// Bounded S-curve.
    Hyperbolic(HyperbolicTf),
}

impl Default for TfSaturation {
    fn default() -> Self {
        TfSaturation::Baseline(BaselineTf::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_norm_default_is_single_point_plateau() {
        let cfg = LengthNorm::default();
        assert_eq!(cfg.min, 1);
        assert_eq!(cfg.max, 1);
        assert!((cfg.steepness - 0.5).abs() < f64::EPSILON);
        assert!(cfg.discount_overlaps);
    }

    #[test]
    fn baseline_default_is_plain_sqrt() {
        let cfg = BaselineTf::default();
        assert!(cfg.base.abs() < f64::EPSILON);
        assert!(cfg.min_freq.abs() < f64::EPSILON);
    }

    #[test]
    fn saturation_default_is_baseline() {
        assert!(matches!(TfSaturation::default(), TfSaturation::Baseline(_)));
    }

    #[test]
    fn configs_serde_roundtrip() {
        let tf = TfSaturation::Hyperbolic(HyperbolicTf::new(0.0, 2.0, 1.3, 10.0));
        let json = serde_json::to_string(&tf).unwrap();
        let decoded: TfSaturation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tf);

        let ln = LengthNorm::with_overlaps(2, 5, 0.25, false);
        let json = serde_json::to_string(&ln).unwrap();
        let decoded: LengthNorm = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ln);
    }
}
