//! Pluggable relevance scoring for a search ranking pipeline.
//!
//! This crate provides the scoring core of a ranking pipeline: a
//! length-normalization model with a configurable flat plateau, two
//! interchangeable term-frequency saturation curves, and a diagnostic
//! explanation tree that records how a score was derived.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  config.rs  │────▶│   scoring/   │────▶│  explain.rs │
//! │ (LengthNorm,│     │ (factor,     │     │ (Explanation│
//! │ TfSaturation│     │  saturate,   │     │  tree,      │
//! │  values)    │     │  the model)  │     │  tri-state) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     contracts.rs                     │
//! │   (compile-time plateau identity, debug-mode         │
//! │    precondition and bounds checks)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline owns everything else: the inverted index, query evaluation,
//! collection statistics, and top-k collection all live upstream or
//! downstream of this crate. What crosses the boundary is small: per-field
//! statistics and raw term frequencies come in, normalization and
//! saturation scalars (plus optional explanation trees) go out.
//!
//! # Usage
//!
//! ```
//! use plateau::{FieldStats, HyperbolicTf, LengthNorm, PlateauSimilarity, SimilarityModel};
//!
//! let model = PlateauSimilarity::builder()
//!     .length_norm(LengthNorm::new(1, 1, 0.5))
//!     .hyperbolic_tf(HyperbolicTf::new(0.0, 2.0, 1.3, 10.0))
//!     .build();
//!
//! // 10 tokens, 2 of them synonym overlaps: effective length 8.
//! let norm = model.length_norm(&FieldStats::new(10, 2));
//! assert!((norm - 1.0 / 8.0_f64.sqrt()).abs() < 1e-12);
//!
//! // A frequency at the curve's midpoint scores exactly halfway.
//! assert!((model.term_frequency(10.0) - 1.0).abs() < 1e-12);
//! ```
//!
//! All computation entry points are pure functions of immutable
//! configuration: one model can be shared across any number of scoring
//! threads with no locking.

// Module declarations
pub mod config;
pub mod contracts;
mod explain;
mod scoring;
mod types;

// Re-exports for public API
pub use config::{BaselineTf, HyperbolicTf, LengthNorm, TfSaturation};
pub use explain::{Explanation, MatchStatus};
#[cfg(feature = "parallel")]
pub use scoring::length_norms_parallel;
pub use scoring::{length_norms, PlateauSimilarity, PlateauSimilarityBuilder, SimilarityModel};
pub use types::FieldStats;
