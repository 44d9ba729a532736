//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::catalog::Catalog;
use crate::menu::{render_root_menu, render_scheme_menu, resolve_field, INVALID_FIELD_OPTION};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn scheme_ids() -> Vec<String> {
    catalog().list_ordered().map(|(_, e)| e.id.clone()).collect()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_scheme_id() -> impl Strategy<Value = String> {
    proptest::sample::select(scheme_ids())
}

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::Main),
        arb_scheme_id().prop_map(|scheme_id| Stage::SchemeSelected { scheme_id }),
    ]
}

/// "hi" or "start" with random letter case and padding
fn arb_restart_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("hi"), Just("start")],
        proptest::collection::vec(any::<bool>(), 5),
        "[ \t\n]{0,3}",
        "[ \t\n]{0,3}",
    )
        .prop_map(|(word, upper, lead, trail)| {
            let cased: String = word
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{lead}{cased}{trail}")
        })
}

fn arb_any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,4}",
        "-?[0-9]{1,3}",
        "[a-zA-Z ]{0,12}",
        ".{0,20}",
    ]
}

fn arb_unknown_code() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^1-5]",
        "[0-9]{2,3}",
        Just(String::new()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn restart_always_returns_root_menu(stage in arb_stage(), raw in arb_restart_text()) {
        let catalog = catalog();
        let result = transition(&stage, &catalog, Input::parse(&raw)).unwrap();

        prop_assert_eq!(&result.new_stage, &Stage::Main);
        prop_assert_eq!(result.new_stage.selected_scheme(), None);
        prop_assert_eq!(result.reply, render_root_menu(&catalog));
    }

    #[test]
    fn restart_is_idempotent(stage in arb_stage(), raw in arb_restart_text()) {
        let catalog = catalog();
        let first = transition(&stage, &catalog, Input::parse(&raw)).unwrap();
        let second = transition(&first.new_stage, &catalog, Input::parse(&raw)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_input_from_valid_stage_never_errors(stage in arb_stage(), raw in arb_any_text()) {
        let result = transition(&stage, &catalog(), Input::parse(&raw));
        prop_assert!(result.is_ok());
    }

    #[test]
    fn selected_scheme_is_always_in_catalog(stage in arb_stage(), raw in arb_any_text()) {
        let catalog = catalog();
        let result = transition(&stage, &catalog, Input::parse(&raw)).unwrap();

        if let Some(id) = result.new_stage.selected_scheme() {
            prop_assert!(catalog.get(id).is_ok());
        }
    }

    #[test]
    fn out_of_range_index_stays_on_main(n in prop_oneof![Just(0usize), 12usize..10_000]) {
        let catalog = catalog();
        let result = transition(&Stage::Main, &catalog, Input::parse(&n.to_string())).unwrap();

        prop_assert_eq!(result.new_stage, Stage::Main);
        prop_assert_eq!(result.reply, format!("Invalid option.\n\n{}", render_root_menu(&catalog)));
    }

    #[test]
    fn select_back_select_round_trip(n in 1usize..=11) {
        let catalog = catalog();
        let expected_id = catalog.by_index(n).unwrap().id.clone();
        let code = n.to_string();

        let first = transition(&Stage::Main, &catalog, Input::parse(&code)).unwrap();
        prop_assert_eq!(
            &first.new_stage,
            &Stage::SchemeSelected { scheme_id: expected_id.clone() }
        );
        prop_assert_eq!(&first.reply, &render_scheme_menu(&catalog, &expected_id).unwrap());

        let back = transition(&first.new_stage, &catalog, Input::Back).unwrap();
        prop_assert_eq!(&back.new_stage, &Stage::Main);
        prop_assert_eq!(&back.reply, &render_root_menu(&catalog));

        let again = transition(&back.new_stage, &catalog, Input::parse(&code)).unwrap();
        prop_assert_eq!(first, again);
    }

    #[test]
    fn field_reply_matches_resolver(id in arb_scheme_id(), raw in arb_any_text()) {
        let catalog = catalog();
        let stage = Stage::SchemeSelected { scheme_id: id.clone() };
        let input = Input::parse(&raw);

        // Restart and back are covered elsewhere
        prop_assume!(matches!(input, Input::Text(_)));

        let result = transition(&stage, &catalog, input).unwrap();
        let field = resolve_field(&catalog, &id, raw.trim()).unwrap();
        prop_assert_eq!(result.new_stage, stage);
        prop_assert_eq!(result.reply, format!("{field}\n\nReply 0 for main menu."));
    }

    #[test]
    fn unknown_option_codes_soft_fail(id in arb_scheme_id(), code in arb_unknown_code()) {
        let result = resolve_field(&catalog(), &id, &code).unwrap();
        prop_assert_eq!(result, INVALID_FIELD_OPTION);
    }

    #[test]
    fn option_codes_map_to_fields(id in arb_scheme_id()) {
        let catalog = catalog();
        let entry = catalog.get(&id).unwrap();

        prop_assert_eq!(resolve_field(&catalog, &id, "1").unwrap(), entry.overview.clone());
        prop_assert_eq!(resolve_field(&catalog, &id, "2").unwrap(), entry.eligibility.clone());
        prop_assert_eq!(resolve_field(&catalog, &id, "3").unwrap(), entry.documents.clone());
        prop_assert_eq!(resolve_field(&catalog, &id, "4").unwrap(), entry.benefits.clone());
        prop_assert_eq!(resolve_field(&catalog, &id, "5").unwrap(), entry.apply.clone());
    }
}
