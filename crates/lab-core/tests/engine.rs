//! End-to-end and property tests for the Analysis Lab engine.

use proptest::prelude::*;

use lab_core::session::Phase;
use lab_core::{Cue, Intent, Selection, Session, Verdict};

#[test]
fn cause_effect_walkthrough() {
    let mut session = Session::builtin();

    let outcome = session.apply(Intent::StartModule {
        id: "cause-effect".to_string(),
    });
    assert_eq!(outcome.cue(), Some(Cue::ModuleStarted));
    assert_eq!(session.scenario_index(), Some(0));

    // Scenario 0 is the traffic congestion case: 1, 2, 4, 5 are correct.
    for id in [1, 2, 4, 5] {
        assert!(session.apply(Intent::ToggleOption { id }).is_accepted());
    }
    let outcome = session.apply(Intent::Submit);
    assert_eq!(outcome.cue(), Some(Cue::AnswerCorrect));
    assert_eq!(session.score(), 10);
    assert_eq!(session.phase(), Some(Phase::Answered(Verdict::Correct)));

    assert!(session.apply(Intent::Advance).is_accepted());
    assert_eq!(session.scenario_index(), Some(1));
    assert_eq!(session.phase(), Some(Phase::Unanswered));
    assert!(matches!(
        session.selection(),
        Some(Selection::Multi(set)) if set.is_empty()
    ));
}

#[test]
fn full_tour_of_all_modules() {
    let mut session = Session::builtin();

    // Cause & effect: answer the first scenario wrong, then bail out.
    session.apply(Intent::StartModule {
        id: "cause-effect".to_string(),
    });
    session.apply(Intent::ToggleOption { id: 3 });
    assert_eq!(session.apply(Intent::Submit).cue(), Some(Cue::AnswerIncorrect));
    session.apply(Intent::ExitToHome);
    assert_eq!(session.score(), 0);

    // Argument analyzer: one correct case.
    session.apply(Intent::StartModule {
        id: "argument".to_string(),
    });
    session.apply(Intent::SelectOption { id: 1 });
    session.apply(Intent::Submit);
    session.apply(Intent::ExitToHome);
    assert_eq!(session.score(), 15);

    // System thinker: discover two pairs, then reveal both systems.
    session.apply(Intent::StartModule {
        id: "systems".to_string(),
    });
    session.apply(Intent::TapComponent {
        id: "sunlight".to_string(),
    });
    session.apply(Intent::TapComponent {
        id: "trees".to_string(),
    });
    session.apply(Intent::Reveal);
    session.apply(Intent::Advance);
    session.apply(Intent::Reveal);
    session.apply(Intent::Advance);
    assert!(session.is_home());
    assert_eq!(session.score(), 15 + 40);

    // Scientific method: all eight steps correct.
    session.apply(Intent::StartModule {
        id: "scientific".to_string(),
    });
    for _ in 0..8 {
        session.apply(Intent::SelectOption { id: 1 });
        session.apply(Intent::Submit);
        session.apply(Intent::Advance);
    }
    assert!(session.is_home());
    assert_eq!(session.score(), 15 + 40 + 80);
}

#[test]
fn pair_order_does_not_matter() {
    let mut a = Session::builtin();
    let mut b = Session::builtin();
    for session in [&mut a, &mut b] {
        session.apply(Intent::StartModule {
            id: "systems".to_string(),
        });
    }
    for id in ["trees", "soil"] {
        a.apply(Intent::TapComponent { id: id.to_string() });
    }
    for id in ["soil", "trees"] {
        b.apply(Intent::TapComponent { id: id.to_string() });
    }
    assert_eq!(a.selection(), b.selection());
}

fn module_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cause-effect".to_string()),
        Just("argument".to_string()),
        Just("systems".to_string()),
        Just("scientific".to_string()),
        Just("unknown".to_string()),
    ]
}

fn component_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("trees".to_string()),
        Just("soil".to_string()),
        Just("water".to_string()),
        Just("animals".to_string()),
        Just("teachers".to_string()),
        Just("bogus".to_string()),
    ]
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        module_id_strategy().prop_map(|id| Intent::StartModule { id }),
        Just(Intent::ExitToHome),
        (0u32..8).prop_map(|id| Intent::ToggleOption { id }),
        (0u32..8).prop_map(|id| Intent::SelectOption { id }),
        component_id_strategy().prop_map(|id| Intent::TapComponent { id }),
        Just(Intent::Submit),
        Just(Intent::Reveal),
        Just(Intent::Advance),
    ]
}

proptest! {
    #[test]
    fn score_never_decreases(intents in prop::collection::vec(intent_strategy(), 0..80)) {
        let mut session = Session::builtin();
        let mut previous = session.score();
        for intent in intents {
            session.apply(intent);
            prop_assert!(session.score() >= previous);
            previous = session.score();
        }
    }

    #[test]
    fn scenario_index_stays_in_range(intents in prop::collection::vec(intent_strategy(), 0..80)) {
        let mut session = Session::builtin();
        for intent in intents {
            session.apply(intent);
            if let (Some(index), Some(module)) =
                (session.scenario_index(), session.active_module())
            {
                prop_assert!(index < module.scenarios.len());
            }
        }
    }

    #[test]
    fn selection_matches_active_kind(intents in prop::collection::vec(intent_strategy(), 0..80)) {
        let mut session = Session::builtin();
        for intent in intents {
            session.apply(intent);
            if let (Some(selection), Some(module)) =
                (session.selection(), session.active_module())
            {
                let matches_kind = matches!(
                    (selection, module.kind),
                    (Selection::Multi(_), lab_core::ScenarioKind::MultiSelect)
                        | (Selection::Single(_), lab_core::ScenarioKind::SingleChoice)
                        | (Selection::Pairs(_), lab_core::ScenarioKind::PairConnect)
                        | (Selection::Steps(_), lab_core::ScenarioKind::Pipeline)
                );
                prop_assert!(matches_kind);
            }
        }
    }

    #[test]
    fn toggle_twice_restores_selection(
        prior in prop::collection::btree_set(1u32..=6, 0..4),
        id in 1u32..=6,
    ) {
        let mut session = Session::builtin();
        session.apply(Intent::StartModule { id: "cause-effect".to_string() });
        for option in &prior {
            session.apply(Intent::ToggleOption { id: *option });
        }
        let before = session.selection().cloned();
        session.apply(Intent::ToggleOption { id });
        session.apply(Intent::ToggleOption { id });
        prop_assert_eq!(session.selection().cloned(), before);
    }

    #[test]
    fn answered_selection_is_frozen(
        intents in prop::collection::vec(intent_strategy(), 0..40),
    ) {
        let mut session = Session::builtin();
        session.apply(Intent::StartModule { id: "cause-effect".to_string() });
        session.apply(Intent::ToggleOption { id: 1 });
        session.apply(Intent::Submit);
        let frozen = session.selection().cloned();
        for intent in intents {
            if matches!(intent, Intent::Advance | Intent::ExitToHome | Intent::StartModule { .. }) {
                continue;
            }
            session.apply(intent);
            prop_assert_eq!(session.selection().cloned(), frozen.clone());
        }
    }
}
