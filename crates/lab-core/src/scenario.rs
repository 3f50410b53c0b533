//! Scenario definitions: the four interaction shapes of the Analysis Lab.
//!
//! Every module carries an ordered list of [`ScenarioDefinition`]s, all of
//! the same [`ScenarioKind`]. The kind selects the evaluation policy in
//! [`crate::evaluate`] and the selection variant in [`crate::selection`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an answer option within a scenario.
pub type OptionId = u32;

/// The interaction shape shared by all scenarios of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Select every contributing factor; verdict is an exact set match.
    MultiSelect,
    /// Pick the single best answer.
    SingleChoice,
    /// Connect components of a system by tapping pairs, then reveal.
    PairConnect,
    /// Work through ordered steps, each a single-choice prompt.
    Pipeline,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiSelect => write!(f, "multi-select"),
            Self::SingleChoice => write!(f, "single-choice"),
            Self::PairConnect => write!(f, "pair-connect"),
            Self::Pipeline => write!(f, "pipeline"),
        }
    }
}

/// An answer option with a correctness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Identifier unique within the owning scenario or step.
    pub id: OptionId,
    /// Text shown to the user.
    pub label: String,
    /// Whether picking this option counts as correct.
    pub correct: bool,
    /// Explanation shown after submitting, where the kind uses per-option
    /// feedback (single-choice questions and pipeline steps).
    pub explanation: Option<String>,
}

impl OptionDefinition {
    /// Create an option without its own explanation.
    pub fn new(id: OptionId, label: impl Into<String>, correct: bool) -> Self {
        Self {
            id,
            label: label.into(),
            correct,
            explanation: None,
        }
    }

    /// Attach a per-option explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// A component of an interconnected system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Identifier unique within the owning scenario.
    pub id: String,
    /// Text shown to the user.
    pub label: String,
    /// Component ids this one directly affects. Informational ground
    /// truth for the reveal display only; never validated against the
    /// user's discovered pairs.
    pub affects: Vec<String>,
}

impl ComponentDefinition {
    /// Create a component with its adjacency list.
    pub fn new(id: impl Into<String>, label: impl Into<String>, affects: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            affects: affects.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A "select all contributing factors" scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelectScenario {
    /// The situation to analyze.
    pub situation: String,
    /// Candidate factors in display order.
    pub options: Vec<OptionDefinition>,
    /// Explanation shown after submitting, whatever the verdict.
    pub explanation: String,
}

impl MultiSelectScenario {
    /// Ids of all options flagged correct.
    pub fn correct_ids(&self) -> BTreeSet<OptionId> {
        self.options
            .iter()
            .filter(|o| o.correct)
            .map(|o| o.id)
            .collect()
    }
}

/// A single-best-answer scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoiceScenario {
    /// The argument or material under scrutiny.
    pub context: String,
    /// The question asked about it.
    pub prompt: String,
    /// Candidate answers in display order.
    pub options: Vec<OptionDefinition>,
}

/// A connect-the-components scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConnectScenario {
    /// Name of the system.
    pub name: String,
    /// Instructions shown above the component grid.
    pub description: String,
    /// Components in display order, each with its adjacency list.
    pub components: Vec<ComponentDefinition>,
    /// Key insight shown after the reveal.
    pub insight: String,
}

impl PairConnectScenario {
    /// Look up a component by id.
    pub fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.id == id)
    }
}

/// One step of a stepped pipeline, shaped like a single-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Short name of the step (e.g. "Observation").
    pub name: String,
    /// The question asked at this step.
    pub prompt: String,
    /// Candidate answers in display order.
    pub options: Vec<OptionDefinition>,
}

/// An ordered multi-step scenario (observe, hypothesise, experiment,
/// conclude).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineScenario {
    /// Title of the experiment.
    pub title: String,
    /// The framing question for the whole pipeline.
    pub question: String,
    /// Steps in order; each must be answered before advancing.
    pub steps: Vec<StepDefinition>,
}

/// One unit of interaction within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioDefinition {
    /// Select every contributing factor.
    MultiSelect(MultiSelectScenario),
    /// Pick the single best answer.
    SingleChoice(SingleChoiceScenario),
    /// Discover connections, then reveal the system map.
    PairConnect(PairConnectScenario),
    /// Ordered single-choice steps.
    Pipeline(PipelineScenario),
}

impl ScenarioDefinition {
    /// The kind tag of this scenario's variant.
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Self::MultiSelect(_) => ScenarioKind::MultiSelect,
            Self::SingleChoice(_) => ScenarioKind::SingleChoice,
            Self::PairConnect(_) => ScenarioKind::PairConnect,
            Self::Pipeline(_) => ScenarioKind::Pipeline,
        }
    }

    /// The headline text of the scenario, whatever its shape.
    pub fn title(&self) -> &str {
        match self {
            Self::MultiSelect(s) => &s.situation,
            Self::SingleChoice(s) => &s.prompt,
            Self::PairConnect(s) => &s.name,
            Self::Pipeline(s) => &s.title,
        }
    }
}
