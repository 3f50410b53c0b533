//! User intents, audio cues, and the outcome of applying an intent.
//!
//! The presentation layer translates gestures into [`Intent`]s; the
//! session applies them synchronously and hands back an [`Outcome`]
//! carrying an optional [`Cue`] for the sound layer. Cues are
//! fire-and-forget and never feed back into engine state.

use serde::{Deserialize, Serialize};

use crate::scenario::OptionId;

/// A discrete user intent, the only way session state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Enter the module with the given id.
    StartModule {
        /// Catalog id of the module to start.
        id: String,
    },
    /// Leave the active module, discarding all in-progress state.
    ExitToHome,
    /// Toggle an option in a multi-select scenario.
    ToggleOption {
        /// The option to toggle.
        id: OptionId,
    },
    /// Choose an option in a single-choice prompt or pipeline step,
    /// replacing any prior choice.
    SelectOption {
        /// The option to choose.
        id: OptionId,
    },
    /// Tap a component in a pair-connect scenario.
    TapComponent {
        /// The component tapped.
        id: String,
    },
    /// Submit the current selection for evaluation.
    Submit,
    /// Reveal the system map of a pair-connect scenario.
    Reveal,
    /// Move to the next step, scenario, or home.
    Advance,
}

/// Semantic audio cue emitted alongside a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// An option or pair was added to the selection.
    SelectionAdded,
    /// An option was removed from the selection.
    SelectionRemoved,
    /// A single choice or tap registered.
    OptionChosen,
    /// A module was started.
    ModuleStarted,
    /// The active module was exited.
    ModuleExited,
    /// A submitted answer was correct.
    AnswerCorrect,
    /// A submitted answer was incorrect.
    AnswerIncorrect,
    /// A system map was revealed.
    SystemRevealed,
}

/// The result of applying one intent to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The intent changed session state, possibly with an audio cue.
    Accepted(Option<Cue>),
    /// The intent was invalid in the current state and left it unchanged.
    Ignored,
}

impl Outcome {
    /// Whether the intent changed session state.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The cue accompanying an accepted intent, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Self::Accepted(cue) => *cue,
            Self::Ignored => None,
        }
    }
}
