//! Error types for the Analysis Lab engine.
//!
//! Errors only arise while building or validating a [`Catalog`]; once a
//! session is running, invalid intents are ignored rather than raised
//! (see [`Outcome::Ignored`]).
//!
//! [`Catalog`]: crate::catalog::Catalog
//! [`Outcome::Ignored`]: crate::intent::Outcome::Ignored

use thiserror::Error;

use crate::scenario::ScenarioKind;

/// Result type for catalog operations.
pub type LabResult<T> = Result<T, LabError>;

/// Errors that can occur when constructing or validating a module catalog.
#[derive(Debug, Error)]
pub enum LabError {
    /// Two modules share the same id.
    #[error("duplicate module id: \"{0}\"")]
    DuplicateModule(String),

    /// A module has no scenarios.
    #[error("module \"{0}\" has no scenarios")]
    EmptyModule(String),

    /// A scenario's shape does not match its module's declared kind.
    #[error("module \"{module}\" scenario {scenario}: expected {expected} scenario, found {found}")]
    KindMismatch {
        /// The offending module's id.
        module: String,
        /// Zero-based index of the scenario within the module.
        scenario: usize,
        /// The kind declared on the module.
        expected: ScenarioKind,
        /// The kind of the scenario actually found there.
        found: ScenarioKind,
    },

    /// An option or component id occurs twice within one scenario.
    #[error("module \"{module}\" scenario {scenario}: duplicate id \"{id}\"")]
    DuplicateId {
        /// The offending module's id.
        module: String,
        /// Zero-based index of the scenario within the module.
        scenario: usize,
        /// The repeated option or component id.
        id: String,
    },

    /// A single-choice question must have exactly one correct option.
    #[error("module \"{module}\" scenario {scenario}: expected exactly one correct option, found {found}")]
    WrongCorrectCount {
        /// The offending module's id.
        module: String,
        /// Zero-based index of the scenario within the module.
        scenario: usize,
        /// How many options were flagged correct.
        found: usize,
    },

    /// A multi-select scenario has no correct options, so the exact-match
    /// verdict could never be satisfied.
    #[error("module \"{module}\" scenario {scenario}: no correct options")]
    NoCorrectOption {
        /// The offending module's id.
        module: String,
        /// Zero-based index of the scenario within the module.
        scenario: usize,
    },

    /// An adjacency entry references a component id that does not exist.
    #[error("module \"{module}\" scenario {scenario}: unknown component \"{component}\" in adjacency")]
    UnknownComponent {
        /// The offending module's id.
        module: String,
        /// Zero-based index of the scenario within the module.
        scenario: usize,
        /// The unresolved component id.
        component: String,
    },
}
