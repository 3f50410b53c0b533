//! Per-scenario selection state: the user's answer-in-progress.
//!
//! The selection variant always matches the active scenario's kind; the
//! session constructs a fresh one via [`Selection::fresh`] whenever a
//! scenario comes into view and discards it on exit.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenario::{OptionId, ScenarioKind};

/// An unordered, canonicalized pair of component ids.
///
/// The two ids are stored sorted, so `Pair::new("b", "a")` and
/// `Pair::new("a", "b")` are the same pair. Self-pairs are not
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Create a canonicalized pair, or `None` if both ids are equal.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        match a.cmp(&b) {
            Ordering::Less => Some(Self { first: a, second: b }),
            Ordering::Greater => Some(Self { first: b, second: a }),
            Ordering::Equal => None,
        }
    }

    /// The lexicographically smaller id.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger id.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// What a single component tap did to the pair-connect state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped component became the pending anchor.
    AnchorSet,
    /// The pending anchor was tapped again and cleared; no pair formed.
    AnchorCleared,
    /// A new pair was discovered and recorded.
    Added,
    /// The formed pair was already discovered; the anchor was cleared.
    Duplicate,
}

/// Tap-tap progress through a pair-connect scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairProgress {
    /// The component awaiting its partner, if a first tap is pending.
    pub anchor: Option<String>,
    /// All pairs discovered so far.
    pub found: BTreeSet<Pair>,
}

impl PairProgress {
    /// Apply one tap of the two-phase protocol.
    ///
    /// The caller validates that `id` names a component of the active
    /// scenario before tapping.
    pub fn tap(&mut self, id: &str) -> TapOutcome {
        match self.anchor.take() {
            None => {
                self.anchor = Some(id.to_string());
                TapOutcome::AnchorSet
            }
            Some(anchor) if anchor == id => TapOutcome::AnchorCleared,
            Some(anchor) => match Pair::new(anchor, id) {
                Some(pair) => {
                    if self.found.insert(pair) {
                        TapOutcome::Added
                    } else {
                        TapOutcome::Duplicate
                    }
                }
                // Unreachable: equal ids are handled by the arm above.
                None => TapOutcome::AnchorCleared,
            },
        }
    }
}

/// Progress through a pipeline scenario's ordered steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    /// Index of the step currently in view.
    pub step: usize,
    /// Chosen option per step index. Entries persist as the cursor
    /// advances within one scenario.
    pub answers: BTreeMap<usize, OptionId>,
}

impl StepProgress {
    /// The chosen option for the step currently in view, if any.
    pub fn current(&self) -> Option<OptionId> {
        self.answers.get(&self.step).copied()
    }
}

/// The user's mutable answer-in-progress, shaped by the scenario kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Set of toggled option ids (multi-select).
    Multi(BTreeSet<OptionId>),
    /// The single chosen option, if any (single-choice).
    Single(Option<OptionId>),
    /// Pending anchor and discovered pairs (pair-connect).
    Pairs(PairProgress),
    /// Step cursor and per-step answers (pipeline).
    Steps(StepProgress),
}

impl Selection {
    /// An empty selection of the shape matching `kind`.
    pub fn fresh(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::MultiSelect => Self::Multi(BTreeSet::new()),
            ScenarioKind::SingleChoice => Self::Single(None),
            ScenarioKind::PairConnect => Self::Pairs(PairProgress::default()),
            ScenarioKind::Pipeline => Self::Steps(StepProgress::default()),
        }
    }
}
