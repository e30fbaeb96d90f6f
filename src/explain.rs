// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score explanations: the arithmetic behind a number, as a tree.
//!
//! An [`Explanation`] decomposes one document's relevance score into the
//! contributions that produced it. It is diagnostics only - nothing in the
//! scoring path ever reads one back. Each tree is built by exactly one
//! scoring call, handed to a renderer or serializer, and dropped.
//!
//! # Match status is not the score
//!
//! Whether a document *matched* and how it *scored* are separate questions.
//! A required clause that failed contributes 0 for a structurally different
//! reason than a clause that merely ranked low, so the match flag is
//! tri-state: explicitly matched, explicitly not matched, or unspecified.
//! Unspecified nodes fall back to the base rule - positive value means
//! match. Keeping the three cases a tagged enum makes the fallback an
//! explicit arm rather than a null check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state match flag for an explanation node.
///
/// `Unspecified` defers to the value-based default in
/// [`Explanation::is_match`]; the explicit states override it in either
/// direction regardless of the node's numeric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Structurally a match, whatever the value says.
    Matched,
    /// Structurally not a match, even with a positive value.
    NotMatched,
    /// No explicit determination; `value > 0` decides.
    #[default]
    Unspecified,
}

/// One node in a score-explanation tree.
///
/// `value` is the numeric contribution this node represents; `details` are
/// the sub-contributions it decomposes into, in insertion order. `value`
/// and `description` are fixed at construction; `status` is assigned once
/// by whichever combiner determines it (plain assignment, last write wins);
/// `details` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Numeric contribution of this node.
    pub value: f64,
    /// Human-readable description of where the value came from.
    pub description: String,
    /// Tri-state match determination.
    pub status: MatchStatus,
    /// Sub-contributions, insertion order significant. Empty for leaves.
    pub details: Vec<Explanation>,
}

impl Explanation {
    /// A leaf node with no explicit match determination.
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Explanation {
            value,
            description: description.into(),
            status: MatchStatus::Unspecified,
            details: Vec::new(),
        }
    }

    /// A node explicitly marked as a match.
    pub fn matched(value: f64, description: impl Into<String>) -> Self {
        Explanation::new(value, description).with_status(MatchStatus::Matched)
    }

    /// A node explicitly marked as a non-match.
    pub fn not_matched(value: f64, description: impl Into<String>) -> Self {
        Explanation::new(value, description).with_status(MatchStatus::NotMatched)
    }

    /// Set the match status, consuming style.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Append a sub-contribution.
    pub fn push(&mut self, detail: Explanation) {
        self.details.push(detail);
    }

    /// Append a sub-contribution, consuming style.
    pub fn with_detail(mut self, detail: Explanation) -> Self {
        self.details.push(detail);
        self
    }

    /// Sub-contributions in insertion order.
    pub fn details(&self) -> &[Explanation] {
        &self.details
    }

    /// Effective match determination.
    ///
    /// An explicit status wins; otherwise a node counts as a match exactly
    /// when its value is strictly positive.
    pub fn is_match(&self) -> bool {
        match self.status {
            MatchStatus::Matched => true,
            MatchStatus::NotMatched => false,
            MatchStatus::Unspecified => self.value > 0.0,
        }
    }

    /// The node-local summary line.
    ///
    /// Nodes without an explicit status render as `value = description`;
    /// explicit statuses are announced inline.
    pub fn summary(&self) -> String {
        match self.status {
            MatchStatus::Unspecified => format!("{} = {}", self.value, self.description),
            MatchStatus::Matched => format!("{} = (MATCH) {}", self.value, self.description),
            MatchStatus::NotMatched => {
                format!("{} = (NON-MATCH) {}", self.value, self.description)
            }
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.summary(), indent = depth * 2)?;
        for detail in &self.details {
            detail.render(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Explanation {
    /// Renders the whole tree, one summary line per node, two spaces of
    /// indentation per depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

#[cfg(feature = "serde_json")]
impl Explanation {
    /// The tree as pretty-printed JSON, for debug endpoints and structured
    /// log sinks that want more than the flat [`Display`](fmt::Display)
    /// rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
