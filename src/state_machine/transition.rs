//! Pure state transition function

use super::{Input, Stage};
use crate::catalog::{Catalog, CatalogError};
use crate::menu::{render_root_menu, render_scheme_menu, resolve_field};
use thiserror::Error;

const INVALID_SELECTION_PREFIX: &str = "Invalid option.\n\n";
const MAIN_MENU_FOOTER: &str = "\n\nReply 0 for main menu.";

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_stage: Stage,
    pub reply: String,
}

impl TransitionResult {
    pub fn new(stage: Stage, reply: impl Into<String>) -> Self {
        Self {
            new_stage: stage,
            reply: reply.into(),
        }
    }
}

/// Errors that can occur during transition
///
/// User typos are never errors. This only fires when a stage refers to a
/// scheme the catalog does not have.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Stage refers to unknown scheme: {0}")]
    UnknownScheme(#[from] CatalogError),
}

/// Pure transition function
///
/// Given the same stage, catalog, and input it always produces the same
/// result, with no I/O.
pub fn transition(
    stage: &Stage,
    catalog: &Catalog,
    input: Input,
) -> Result<TransitionResult, TransitionError> {
    match (stage, input) {
        // Restart works from anywhere
        (_, Input::Restart) => Ok(TransitionResult::new(
            Stage::Main,
            render_root_menu(catalog),
        )),

        // Main + valid index -> SchemeSelected
        (Stage::Main, input) => match input.menu_index().and_then(|n| catalog.by_index(n)) {
            Some(entry) => Ok(TransitionResult::new(
                Stage::SchemeSelected {
                    scheme_id: entry.id.clone(),
                },
                render_scheme_menu(catalog, &entry.id)?,
            )),
            None => Ok(TransitionResult::new(
                Stage::Main,
                format!("{INVALID_SELECTION_PREFIX}{}", render_root_menu(catalog)),
            )),
        },

        // SchemeSelected + "0" -> Main
        (Stage::SchemeSelected { .. }, Input::Back) => Ok(TransitionResult::new(
            Stage::Main,
            render_root_menu(catalog),
        )),

        // SchemeSelected + anything else stays put and answers the field
        (Stage::SchemeSelected { scheme_id }, Input::Text(code)) => {
            let text = resolve_field(catalog, scheme_id, &code)?;
            Ok(TransitionResult::new(
                stage.clone(),
                format!("{text}{MAIN_MENU_FOOTER}"),
            ))
        }
    }
}
