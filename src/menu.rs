//! Menu rendering and field lookup
//!
//! Pure functions over the catalog. Nothing here touches session state.

use crate::catalog::{Catalog, CatalogResult, SchemeEntry};
use std::fmt::Write;

const ROOT_HEADER: &str = "🌾 Kisan Mitra\n\nSelect a scheme:\n";
const REPLY_PROMPT: &str = "Reply with number:";
pub const INVALID_FIELD_OPTION: &str = "Invalid option. Reply with 1-5.";

/// The five things a sender can ask about a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Overview,
    Eligibility,
    Documents,
    Benefits,
    HowToApply,
}

impl MenuOption {
    /// All options in menu order
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Overview,
        MenuOption::Eligibility,
        MenuOption::Documents,
        MenuOption::Benefits,
        MenuOption::HowToApply,
    ];

    /// Parse an option code. Only the exact strings "1" through "5" match.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(MenuOption::Overview),
            "2" => Some(MenuOption::Eligibility),
            "3" => Some(MenuOption::Documents),
            "4" => Some(MenuOption::Benefits),
            "5" => Some(MenuOption::HowToApply),
            _ => None,
        }
    }

    pub fn code(self) -> usize {
        match self {
            MenuOption::Overview => 1,
            MenuOption::Eligibility => 2,
            MenuOption::Documents => 3,
            MenuOption::Benefits => 4,
            MenuOption::HowToApply => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Overview => "Overview",
            MenuOption::Eligibility => "Eligibility",
            MenuOption::Documents => "Documents",
            MenuOption::Benefits => "Benefits",
            MenuOption::HowToApply => "How to Apply",
        }
    }

    pub fn select(self, entry: &SchemeEntry) -> &str {
        match self {
            MenuOption::Overview => &entry.overview,
            MenuOption::Eligibility => &entry.eligibility,
            MenuOption::Documents => &entry.documents,
            MenuOption::Benefits => &entry.benefits,
            MenuOption::HowToApply => &entry.apply,
        }
    }
}

/// Root menu listing every scheme by its 1-based position
pub fn render_root_menu(catalog: &Catalog) -> String {
    let mut text = String::from(ROOT_HEADER);
    for (index, entry) in catalog.list_ordered() {
        // Writing to a String cannot fail
        let _ = writeln!(text, "{index}. {}", entry.name);
    }
    text.push('\n');
    text.push_str(REPLY_PROMPT);
    text
}

/// Sub-menu for a single scheme
pub fn render_scheme_menu(catalog: &Catalog, scheme_id: &str) -> CatalogResult<String> {
    let entry = catalog.get(scheme_id)?;
    let mut text = format!("{}\n\n", entry.name);
    for option in MenuOption::ALL {
        let _ = writeln!(text, "{}. {}", option.code(), option.label());
    }
    text.push('\n');
    text.push_str(REPLY_PROMPT);
    Ok(text)
}

/// Text for the chosen field, or the invalid-option text for unknown codes.
///
/// Only an unknown `scheme_id` is an error; a bad `option_code` is ordinary
/// user input and never fails.
pub fn resolve_field(
    catalog: &Catalog,
    scheme_id: &str,
    option_code: &str,
) -> CatalogResult<String> {
    let entry = catalog.get(scheme_id)?;
    Ok(MenuOption::from_code(option_code)
        .map_or(INVALID_FIELD_OPTION, |option| option.select(entry))
        .to_string())
}
