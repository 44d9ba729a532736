//! Conversation stage types

/// Where a sender currently is in the two-level menu
///
/// The selected scheme only exists while a scheme is selected, so the
/// "no scheme at the root" rule is carried by the type itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stage {
    /// Viewing the list of schemes
    #[default]
    Main,

    /// Viewing the field menu for one scheme
    SchemeSelected { scheme_id: String },
}

impl Stage {
    /// The selected scheme id, if any
    pub fn selected_scheme(&self) -> Option<&str> {
        match self {
            Stage::Main => None,
            Stage::SchemeSelected { scheme_id } => Some(scheme_id),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Main => "main",
            Stage::SchemeSelected { .. } => "scheme_selected",
        }
    }
}
