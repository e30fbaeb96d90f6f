// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scoring model: how raw statistics become scoring contributions.
//!
//! The key insight is the plateau: field lengths inside the configured
//! sweet-spot range are all equally fine and score a norm of exactly 1.0.
//! Penalties only start past the boundaries, so tuning is about choosing
//! the range of "normal" field lengths, not about hand-shaping a curve.

mod core;

pub use core::*;
