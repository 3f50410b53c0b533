//! Answer evaluation: pure verdict policies, one per scenario kind.
//!
//! All policies are pure functions of a scenario definition and the
//! current selection. Pair-connect has no policy here: its reveal is
//! always credited (see the session's reveal handler).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scenario::{MultiSelectScenario, OptionDefinition, OptionId};

/// The evaluator's judgment of a submitted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The selection matched the scenario's ground truth.
    Correct,
    /// It did not.
    Incorrect,
}

impl Verdict {
    /// Whether this verdict awards points.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Four-way render classification of one option after submission.
///
/// Drives feedback colors in the presentation layer; the verdict itself
/// never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionClass {
    /// Selected and correct.
    TruePositive,
    /// Selected but incorrect.
    FalsePositive,
    /// Correct but left unselected.
    Missed,
    /// Incorrect and left unselected.
    TrueNegative,
}

/// Exact-set-match policy for multi-select scenarios.
///
/// Correct iff the selection equals the set of correct option ids: same
/// size, same members, no partial credit.
pub fn evaluate_multi(scenario: &MultiSelectScenario, selected: &BTreeSet<OptionId>) -> Verdict {
    if *selected == scenario.correct_ids() {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Single-best-answer policy for single-choice prompts and pipeline steps.
pub fn evaluate_single(options: &[OptionDefinition], chosen: OptionId) -> Verdict {
    if options.iter().any(|o| o.id == chosen && o.correct) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Classify one option for feedback rendering.
pub fn classify(option: &OptionDefinition, selected: bool) -> OptionClass {
    match (selected, option.correct) {
        (true, true) => OptionClass::TruePositive,
        (true, false) => OptionClass::FalsePositive,
        (false, true) => OptionClass::Missed,
        (false, false) => OptionClass::TrueNegative,
    }
}
