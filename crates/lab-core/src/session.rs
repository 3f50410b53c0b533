//! Session management: the scenario state machine.
//!
//! A [`Session`] owns the full in-memory state of one run through the
//! lab: the active module, scenario index, selection, feedback phase,
//! and score. All mutation happens synchronously inside
//! [`Session::apply`]; invalid intents are ignored, never raised.

use crate::catalog::{Catalog, ModuleDefinition};
use crate::evaluate::{self, Verdict};
use crate::intent::{Cue, Intent, Outcome};
use crate::scenario::{OptionId, ScenarioDefinition};
use crate::selection::{Selection, TapOutcome};

/// The feedback gate for the scenario (or pipeline step) in view.
///
/// Selection intents are accepted only while `Unanswered`. The answered
/// arm carries the verdict, so the gate cannot be reopened without the
/// sequencer resetting it for the next scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Selection intents accepted; nothing evaluated yet.
    Unanswered,
    /// Evaluated; selection frozen until the next advance.
    Answered(Verdict),
}

/// Verdict plus the explanation text to surface with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    /// The evaluator's judgment.
    pub verdict: Verdict,
    /// Explanation for the feedback panel: the scenario explanation
    /// (multi-select), the chosen option's explanation (single-choice),
    /// the correct option's explanation (pipeline step), or the key
    /// insight (pair-connect).
    pub explanation: &'a str,
}

/// Per-module state while a module is active.
#[derive(Debug, Clone)]
struct ActiveModule {
    /// Index of the module in the catalog.
    module: usize,
    /// Index of the scenario in view, always in range.
    scenario: usize,
    /// Feedback gate for the scenario or step in view.
    phase: Phase,
    /// The answer-in-progress, shaped by the module's kind.
    selection: Selection,
}

/// The full in-memory state of one user's run through the lab.
pub struct Session {
    catalog: Catalog,
    score: u32,
    active: Option<ActiveModule>,
}

impl Session {
    /// Create a session at the home screen with a score of zero.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            score: 0,
            active: None,
        }
    }

    /// Create a session over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    /// The catalog this session runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Accumulated score; never decreases.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the session is at the home screen.
    pub fn is_home(&self) -> bool {
        self.active.is_none()
    }

    /// The active module's definition, if any.
    pub fn active_module(&self) -> Option<&ModuleDefinition> {
        let active = self.active.as_ref()?;
        Some(&self.catalog.modules()[active.module])
    }

    /// Index of the scenario in view within the active module.
    pub fn scenario_index(&self) -> Option<usize> {
        Some(self.active.as_ref()?.scenario)
    }

    /// The scenario definition in view, if a module is active.
    pub fn scenario(&self) -> Option<&ScenarioDefinition> {
        let active = self.active.as_ref()?;
        let module = &self.catalog.modules()[active.module];
        Some(&module.scenarios[active.scenario])
    }

    /// Feedback gate for the scenario or step in view.
    pub fn phase(&self) -> Option<Phase> {
        Some(self.active.as_ref()?.phase)
    }

    /// The answer-in-progress, if a module is active.
    pub fn selection(&self) -> Option<&Selection> {
        Some(&self.active.as_ref()?.selection)
    }

    /// Whether submit (or reveal) would currently be accepted.
    pub fn can_submit(&self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if active.phase != Phase::Unanswered {
            return false;
        }
        match &active.selection {
            Selection::Multi(set) => !set.is_empty(),
            Selection::Single(chosen) => chosen.is_some(),
            Selection::Pairs(_) => true,
            Selection::Steps(progress) => progress.current().is_some(),
        }
    }

    /// Verdict and explanation for the answered scenario or step in view.
    pub fn feedback(&self) -> Option<Feedback<'_>> {
        let active = self.active.as_ref()?;
        let Phase::Answered(verdict) = active.phase else {
            return None;
        };
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        let explanation = match (scenario, &active.selection) {
            (ScenarioDefinition::MultiSelect(def), _) => def.explanation.as_str(),
            (ScenarioDefinition::SingleChoice(def), Selection::Single(Some(chosen))) => def
                .options
                .iter()
                .find(|o| o.id == *chosen)
                .and_then(|o| o.explanation.as_deref())
                .unwrap_or(""),
            (ScenarioDefinition::PairConnect(def), _) => def.insight.as_str(),
            (ScenarioDefinition::Pipeline(def), Selection::Steps(progress)) => def.steps
                [progress.step]
                .options
                .iter()
                .find(|o| o.correct)
                .and_then(|o| o.explanation.as_deref())
                .unwrap_or(""),
            _ => "",
        };
        Some(Feedback {
            verdict,
            explanation,
        })
    }

    /// Apply one user intent, returning whether it was accepted and any
    /// audio cue to forward to the sound layer.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::StartModule { id } => self.start_module(&id),
            Intent::ExitToHome => self.exit_to_home(),
            Intent::ToggleOption { id } => self.toggle_option(id),
            Intent::SelectOption { id } => self.select_option(id),
            Intent::TapComponent { id } => self.tap_component(&id),
            Intent::Submit => self.submit(),
            Intent::Reveal => self.reveal(),
            Intent::Advance => self.advance(),
        }
    }

    fn start_module(&mut self, id: &str) -> Outcome {
        if self.active.is_some() {
            return Outcome::Ignored;
        }
        let Some(index) = self.catalog.index_of(id) else {
            return Outcome::Ignored;
        };
        let module = &self.catalog.modules()[index];
        let Some(first) = module.scenarios.first() else {
            return Outcome::Ignored;
        };
        self.active = Some(ActiveModule {
            module: index,
            scenario: 0,
            phase: Phase::Unanswered,
            selection: Selection::fresh(first.kind()),
        });
        Outcome::Accepted(Some(Cue::ModuleStarted))
    }

    fn exit_to_home(&mut self) -> Outcome {
        if self.active.take().is_none() {
            return Outcome::Ignored;
        }
        Outcome::Accepted(Some(Cue::ModuleExited))
    }

    fn toggle_option(&mut self, id: OptionId) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if active.phase != Phase::Unanswered {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        let (ScenarioDefinition::MultiSelect(def), Selection::Multi(set)) =
            (scenario, &mut active.selection)
        else {
            return Outcome::Ignored;
        };
        if !def.options.iter().any(|o| o.id == id) {
            return Outcome::Ignored;
        }
        if set.remove(&id) {
            Outcome::Accepted(Some(Cue::SelectionRemoved))
        } else {
            set.insert(id);
            Outcome::Accepted(Some(Cue::SelectionAdded))
        }
    }

    fn select_option(&mut self, id: OptionId) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if active.phase != Phase::Unanswered {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        match (scenario, &mut active.selection) {
            (ScenarioDefinition::SingleChoice(def), Selection::Single(slot)) => {
                if !def.options.iter().any(|o| o.id == id) {
                    return Outcome::Ignored;
                }
                *slot = Some(id);
                Outcome::Accepted(Some(Cue::OptionChosen))
            }
            (ScenarioDefinition::Pipeline(def), Selection::Steps(progress)) => {
                let step = &def.steps[progress.step];
                if !step.options.iter().any(|o| o.id == id) {
                    return Outcome::Ignored;
                }
                progress.answers.insert(progress.step, id);
                Outcome::Accepted(Some(Cue::OptionChosen))
            }
            _ => Outcome::Ignored,
        }
    }

    fn tap_component(&mut self, id: &str) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if active.phase != Phase::Unanswered {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        let (ScenarioDefinition::PairConnect(def), Selection::Pairs(progress)) =
            (scenario, &mut active.selection)
        else {
            return Outcome::Ignored;
        };
        if def.component(id).is_none() {
            return Outcome::Ignored;
        }
        match progress.tap(id) {
            TapOutcome::Added => Outcome::Accepted(Some(Cue::SelectionAdded)),
            TapOutcome::AnchorSet | TapOutcome::AnchorCleared | TapOutcome::Duplicate => {
                Outcome::Accepted(Some(Cue::OptionChosen))
            }
        }
    }

    fn submit(&mut self) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if active.phase != Phase::Unanswered {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        let verdict = match (scenario, &active.selection) {
            (ScenarioDefinition::MultiSelect(def), Selection::Multi(set)) => {
                if set.is_empty() {
                    return Outcome::Ignored;
                }
                evaluate::evaluate_multi(def, set)
            }
            (ScenarioDefinition::SingleChoice(def), Selection::Single(Some(chosen))) => {
                evaluate::evaluate_single(&def.options, *chosen)
            }
            (ScenarioDefinition::Pipeline(def), Selection::Steps(progress)) => {
                let Some(chosen) = progress.current() else {
                    return Outcome::Ignored;
                };
                evaluate::evaluate_single(&def.steps[progress.step].options, chosen)
            }
            // Pair-connect answers via reveal; single-choice without a
            // selection has nothing to evaluate.
            _ => return Outcome::Ignored,
        };
        active.phase = Phase::Answered(verdict);
        if verdict.is_correct() {
            self.score += module.points;
            Outcome::Accepted(Some(Cue::AnswerCorrect))
        } else {
            Outcome::Accepted(Some(Cue::AnswerIncorrect))
        }
    }

    fn reveal(&mut self) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if active.phase != Phase::Unanswered {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];
        if !matches!(scenario, ScenarioDefinition::PairConnect(_)) {
            return Outcome::Ignored;
        }
        // Reveal always credits the module, whatever was discovered; the
        // adjacency map is informational, not validated against.
        active.phase = Phase::Answered(Verdict::Correct);
        self.score += module.points;
        Outcome::Accepted(Some(Cue::SystemRevealed))
    }

    fn advance(&mut self) -> Outcome {
        let Some(active) = self.active.as_mut() else {
            return Outcome::Ignored;
        };
        if !matches!(active.phase, Phase::Answered(_)) {
            return Outcome::Ignored;
        }
        let module = &self.catalog.modules()[active.module];
        let scenario = &module.scenarios[active.scenario];

        // Pipeline steps advance within the scenario first.
        if let (ScenarioDefinition::Pipeline(def), Selection::Steps(progress)) =
            (scenario, &mut active.selection)
            && progress.step + 1 < def.steps.len()
        {
            progress.step += 1;
            active.phase = Phase::Unanswered;
            return Outcome::Accepted(None);
        }

        if active.scenario + 1 < module.scenarios.len() {
            active.scenario += 1;
            active.selection = Selection::fresh(module.scenarios[active.scenario].kind());
            active.phase = Phase::Unanswered;
            Outcome::Accepted(None)
        } else {
            self.active = None;
            Outcome::Accepted(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Pair;

    fn start(id: &str) -> Session {
        let mut session = Session::builtin();
        let outcome = session.apply(Intent::StartModule { id: id.to_string() });
        assert_eq!(outcome.cue(), Some(Cue::ModuleStarted));
        session
    }

    fn toggle(session: &mut Session, id: OptionId) -> Outcome {
        session.apply(Intent::ToggleOption { id })
    }

    #[test]
    fn new_session_is_home_with_zero_score() {
        let session = Session::builtin();
        assert!(session.is_home());
        assert_eq!(session.score(), 0);
        assert!(session.scenario().is_none());
        assert!(session.phase().is_none());
    }

    #[test]
    fn start_unknown_module_is_ignored() {
        let mut session = Session::builtin();
        let outcome = session.apply(Intent::StartModule {
            id: "time-travel".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert!(session.is_home());
    }

    #[test]
    fn start_while_active_is_ignored() {
        let mut session = start("cause-effect");
        let outcome = session.apply(Intent::StartModule {
            id: "argument".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(session.active_module().unwrap().id, "cause-effect");
    }

    #[test]
    fn start_initializes_fresh_state() {
        let session = start("cause-effect");
        assert_eq!(session.scenario_index(), Some(0));
        assert_eq!(session.phase(), Some(Phase::Unanswered));
        assert!(matches!(session.selection(), Some(Selection::Multi(set)) if set.is_empty()));
    }

    #[test]
    fn exit_discards_everything() {
        let mut session = start("cause-effect");
        toggle(&mut session, 1);
        session.apply(Intent::Submit);

        let outcome = session.apply(Intent::ExitToHome);
        assert_eq!(outcome.cue(), Some(Cue::ModuleExited));
        assert!(session.is_home());
        assert!(session.selection().is_none());

        // Re-entering starts from scratch.
        let outcome = session.apply(Intent::StartModule {
            id: "cause-effect".to_string(),
        });
        assert!(outcome.is_accepted());
        assert_eq!(session.scenario_index(), Some(0));
        assert!(matches!(session.selection(), Some(Selection::Multi(set)) if set.is_empty()));
    }

    #[test]
    fn exit_at_home_is_ignored() {
        let mut session = Session::builtin();
        assert_eq!(session.apply(Intent::ExitToHome), Outcome::Ignored);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut session = start("cause-effect");
        assert_eq!(toggle(&mut session, 3).cue(), Some(Cue::SelectionAdded));
        assert_eq!(toggle(&mut session, 3).cue(), Some(Cue::SelectionRemoved));
        assert!(matches!(session.selection(), Some(Selection::Multi(set)) if set.is_empty()));
    }

    #[test]
    fn toggle_unknown_option_is_ignored() {
        let mut session = start("cause-effect");
        assert_eq!(toggle(&mut session, 99), Outcome::Ignored);
    }

    #[test]
    fn submit_empty_multi_select_is_ignored() {
        let mut session = start("cause-effect");
        assert!(!session.can_submit());
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
        assert_eq!(session.phase(), Some(Phase::Unanswered));
    }

    #[test]
    fn exact_match_awards_points() {
        let mut session = start("cause-effect");
        for id in [1, 2, 4, 5] {
            toggle(&mut session, id);
        }
        assert!(session.can_submit());
        let outcome = session.apply(Intent::Submit);
        assert_eq!(outcome.cue(), Some(Cue::AnswerCorrect));
        assert_eq!(session.score(), 10);
        assert_eq!(session.phase(), Some(Phase::Answered(Verdict::Correct)));
        assert_eq!(
            session.feedback().unwrap().verdict,
            Verdict::Correct
        );
    }

    #[test]
    fn near_miss_scores_nothing() {
        let mut session = start("cause-effect");
        for id in [1, 2, 4] {
            toggle(&mut session, id);
        }
        let outcome = session.apply(Intent::Submit);
        assert_eq!(outcome.cue(), Some(Cue::AnswerIncorrect));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Some(Phase::Answered(Verdict::Incorrect)));
    }

    #[test]
    fn selection_frozen_once_answered() {
        let mut session = start("cause-effect");
        toggle(&mut session, 1);
        session.apply(Intent::Submit);

        assert_eq!(toggle(&mut session, 2), Outcome::Ignored);
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
        assert!(
            matches!(session.selection(), Some(Selection::Multi(set)) if set.len() == 1)
        );
    }

    #[test]
    fn advance_requires_answered_phase() {
        let mut session = start("cause-effect");
        assert_eq!(session.apply(Intent::Advance), Outcome::Ignored);
        assert_eq!(session.scenario_index(), Some(0));
    }

    #[test]
    fn advance_resets_selection_and_phase() {
        let mut session = start("cause-effect");
        toggle(&mut session, 1);
        session.apply(Intent::Submit);

        let outcome = session.apply(Intent::Advance);
        assert!(outcome.is_accepted());
        assert_eq!(session.scenario_index(), Some(1));
        assert_eq!(session.phase(), Some(Phase::Unanswered));
        assert!(matches!(session.selection(), Some(Selection::Multi(set)) if set.is_empty()));
    }

    #[test]
    fn advance_past_last_scenario_goes_home() {
        let mut session = start("cause-effect");
        let count = session.active_module().unwrap().scenarios.len();
        for _ in 0..count {
            toggle(&mut session, 1);
            assert!(session.apply(Intent::Submit).is_accepted());
            assert!(session.apply(Intent::Advance).is_accepted());
        }
        assert!(session.is_home());
    }

    #[test]
    fn single_choice_replaces_prior_selection() {
        let mut session = start("argument");
        session.apply(Intent::SelectOption { id: 2 });
        session.apply(Intent::SelectOption { id: 3 });
        assert_eq!(session.selection(), Some(&Selection::Single(Some(3))));
    }

    #[test]
    fn single_choice_requires_selection_to_submit() {
        let mut session = start("argument");
        assert!(!session.can_submit());
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
    }

    #[test]
    fn correct_argument_awards_fifteen() {
        let mut session = start("argument");
        session.apply(Intent::SelectOption { id: 1 });
        let outcome = session.apply(Intent::Submit);
        assert_eq!(outcome.cue(), Some(Cue::AnswerCorrect));
        assert_eq!(session.score(), 15);
    }

    #[test]
    fn wrong_argument_shows_chosen_explanation() {
        let mut session = start("argument");
        session.apply(Intent::SelectOption { id: 3 });
        session.apply(Intent::Submit);

        let feedback = session.feedback().unwrap();
        assert_eq!(feedback.verdict, Verdict::Incorrect);
        assert!(feedback.explanation.contains("sample size"));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn toggle_in_single_choice_module_is_ignored() {
        let mut session = start("argument");
        assert_eq!(toggle(&mut session, 1), Outcome::Ignored);
    }

    #[test]
    fn tap_builds_canonical_pairs() {
        let mut session = start("systems");
        session.apply(Intent::TapComponent {
            id: "trees".to_string(),
        });
        let outcome = session.apply(Intent::TapComponent {
            id: "soil".to_string(),
        });
        assert_eq!(outcome.cue(), Some(Cue::SelectionAdded));

        let Some(Selection::Pairs(progress)) = session.selection() else {
            panic!("expected pair selection");
        };
        assert!(progress.found.contains(&Pair::new("soil", "trees").unwrap()));
    }

    #[test]
    fn tap_unknown_component_is_ignored() {
        let mut session = start("systems");
        let outcome = session.apply(Intent::TapComponent {
            id: "volcano".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn reveal_credits_unconditionally() {
        let mut session = start("systems");
        // No pairs discovered at all.
        assert!(session.can_submit());
        let outcome = session.apply(Intent::Reveal);
        assert_eq!(outcome.cue(), Some(Cue::SystemRevealed));
        assert_eq!(session.score(), 20);
        assert_eq!(session.phase(), Some(Phase::Answered(Verdict::Correct)));
        assert!(session.feedback().unwrap().explanation.contains("interconnected"));
    }

    #[test]
    fn reveal_outside_pair_connect_is_ignored() {
        let mut session = start("cause-effect");
        assert_eq!(session.apply(Intent::Reveal), Outcome::Ignored);
    }

    #[test]
    fn submit_in_pair_connect_is_ignored() {
        let mut session = start("systems");
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
    }

    #[test]
    fn taps_frozen_after_reveal() {
        let mut session = start("systems");
        session.apply(Intent::Reveal);
        let outcome = session.apply(Intent::TapComponent {
            id: "trees".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn pipeline_steps_advance_within_scenario() {
        let mut session = start("scientific");
        session.apply(Intent::SelectOption { id: 1 });
        session.apply(Intent::Submit);
        assert_eq!(session.score(), 10);

        session.apply(Intent::Advance);
        assert_eq!(session.scenario_index(), Some(0));
        assert_eq!(session.phase(), Some(Phase::Unanswered));

        let Some(Selection::Steps(progress)) = session.selection() else {
            panic!("expected step selection");
        };
        assert_eq!(progress.step, 1);
        // The first step's answer is retained.
        assert_eq!(progress.answers.get(&0), Some(&1));
        assert!(progress.current().is_none());
    }

    #[test]
    fn pipeline_step_requires_answer_before_advance() {
        let mut session = start("scientific");
        assert_eq!(session.apply(Intent::Advance), Outcome::Ignored);
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
    }

    #[test]
    fn pipeline_wrong_step_scores_nothing_but_advances() {
        let mut session = start("scientific");
        session.apply(Intent::SelectOption { id: 2 });
        let outcome = session.apply(Intent::Submit);
        assert_eq!(outcome.cue(), Some(Cue::AnswerIncorrect));
        assert_eq!(session.score(), 0);

        // Feedback shows the correct option's explanation.
        let feedback = session.feedback().unwrap();
        assert!(feedback.explanation.contains("specific and measurable"));

        assert!(session.apply(Intent::Advance).is_accepted());
        let Some(Selection::Steps(progress)) = session.selection() else {
            panic!("expected step selection");
        };
        assert_eq!(progress.step, 1);
    }

    #[test]
    fn pipeline_new_experiment_resets_steps() {
        let mut session = start("scientific");
        for _ in 0..4 {
            session.apply(Intent::SelectOption { id: 1 });
            session.apply(Intent::Submit);
            session.apply(Intent::Advance);
        }
        // Now at experiment 2, step 0, with a clean answer map.
        assert_eq!(session.scenario_index(), Some(1));
        let Some(Selection::Steps(progress)) = session.selection() else {
            panic!("expected step selection");
        };
        assert_eq!(progress.step, 0);
        assert!(progress.answers.is_empty());
        assert_eq!(session.score(), 40);
    }

    #[test]
    fn pipeline_module_completion_goes_home() {
        let mut session = start("scientific");
        for _ in 0..8 {
            session.apply(Intent::SelectOption { id: 1 });
            session.apply(Intent::Submit);
            session.apply(Intent::Advance);
        }
        assert!(session.is_home());
        assert_eq!(session.score(), 80);
    }

    #[test]
    fn score_survives_module_changes() {
        let mut session = start("systems");
        session.apply(Intent::Reveal);
        session.apply(Intent::ExitToHome);
        assert_eq!(session.score(), 20);

        session.apply(Intent::StartModule {
            id: "argument".to_string(),
        });
        session.apply(Intent::SelectOption { id: 1 });
        session.apply(Intent::Submit);
        assert_eq!(session.score(), 35);
    }

    #[test]
    fn selection_intents_ignored_at_home() {
        let mut session = Session::builtin();
        assert_eq!(toggle(&mut session, 1), Outcome::Ignored);
        assert_eq!(
            session.apply(Intent::SelectOption { id: 1 }),
            Outcome::Ignored
        );
        assert_eq!(
            session.apply(Intent::TapComponent {
                id: "trees".to_string()
            }),
            Outcome::Ignored
        );
        assert_eq!(session.apply(Intent::Submit), Outcome::Ignored);
        assert_eq!(session.apply(Intent::Reveal), Outcome::Ignored);
        assert_eq!(session.apply(Intent::Advance), Outcome::Ignored);
    }

    #[test]
    fn feedback_none_while_unanswered() {
        let session = start("cause-effect");
        assert!(session.feedback().is_none());
    }
}
