//! Analysis Lab engine: learning modules, the scenario state machine,
//! and answer evaluation.
//!
//! This crate has no I/O. A [`Session`] owns all state; the
//! presentation layer feeds it [`Intent`]s and renders from the
//! snapshot accessors, forwarding any [`Cue`] to its sound layer.

pub mod catalog;
pub mod content;
pub mod error;
pub mod evaluate;
pub mod intent;
pub mod scenario;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, ModuleDefinition};
pub use error::{LabError, LabResult};
pub use evaluate::{OptionClass, Verdict};
pub use intent::{Cue, Intent, Outcome};
pub use scenario::{ScenarioDefinition, ScenarioKind};
pub use selection::{Pair, Selection};
pub use session::{Feedback, Phase, Session};
