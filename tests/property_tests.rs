//! Property tests over random action sequences.
//!
//! Checks that hold after every step of any play-through:
//! - each category sits on at most one slot
//! - a slot tap always leaves nothing armed
//! - a slot past 0 is shown only when the gap before it is shown and valid

use linkwise::{gap_valid, Action, CategoryId, ChainEngine, Visibility};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = CategoryId> {
    prop_oneof![
        Just(CategoryId::Synonym),
        Just(CategoryId::Rhyme),
        Just(CategoryId::Bird),
    ]
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        Just("swift".to_string()),
        Just("Quick".to_string()),
        Just("jay".to_string()),
        Just("stick".to_string()),
        Just("bird".to_string()),
        "[a-z]{1,6}",
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        category().prop_map(Action::SelectCategory),
        (0usize..3).prop_map(Action::ClickSlot),
        (0usize..2, word()).prop_map(|(index, text)| Action::SetGapWord { index, text }),
    ]
}

proptest! {
    #[test]
    fn prop_category_used_at_most_once(actions in prop::collection::vec(action(), 0..40)) {
        let mut engine = ChainEngine::daily();
        for action in actions {
            engine.dispatch(action).unwrap();
            for category in CategoryId::ALL {
                let holders = engine
                    .state()
                    .slots
                    .iter()
                    .filter(|s| s.category == Some(category))
                    .count();
                prop_assert!(holders <= 1, "{category} on {holders} slots");
            }
        }
    }

    #[test]
    fn prop_click_always_disarms(
        actions in prop::collection::vec(action(), 0..30),
        armed in category(),
        slot in 0usize..3,
    ) {
        let mut engine = ChainEngine::daily();
        for action in actions {
            engine.dispatch(action).unwrap();
        }
        if engine.selection() != Some(armed) {
            engine.select_category(armed);
        }
        prop_assert_eq!(engine.selection(), Some(armed));

        engine.click_slot(slot).unwrap();
        prop_assert_eq!(engine.selection(), None);
    }

    #[test]
    fn prop_disclosure_is_chained(actions in prop::collection::vec(action(), 0..40)) {
        let mut engine = ChainEngine::daily();
        for action in actions {
            engine.dispatch(action).unwrap();
            let state = engine.state();
            let vis = Visibility::of(state);

            prop_assert!(vis.slot(0));
            for i in 0..state.gap_count() {
                prop_assert_eq!(vis.gap(i), vis.slot(i) && state.category_at(i).is_some());
                prop_assert_eq!(vis.slot(i + 1), vis.gap(i) && gap_valid(state, i));
            }
        }
    }

    #[test]
    fn prop_stored_gap_errors_are_current(actions in prop::collection::vec(action(), 0..40)) {
        let mut engine = ChainEngine::daily();
        for action in actions {
            engine.dispatch(action).unwrap();
        }
        let state = engine.state();
        for i in 0..state.gap_count() {
            if state.category_at(i).is_none() || state.gaps[i].is_blank() {
                prop_assert!(state.gaps[i].error.is_none());
            }
        }
    }
}
