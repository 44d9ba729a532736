//! Classified inbound text

/// Inbound message text after trimming and command detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// "hi" or "start" in any letter case
    Restart,
    /// Exactly "0"
    Back,
    /// Anything else, trimmed
    Text(String),
}

impl Input {
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("hi") || text.eq_ignore_ascii_case("start") {
            Input::Restart
        } else if text == "0" {
            Input::Back
        } else {
            Input::Text(text.to_string())
        }
    }

    /// 1-based menu index, if the text is a plain unsigned integer
    pub fn menu_index(&self) -> Option<usize> {
        match self {
            Input::Text(text) if text.bytes().all(|b| b.is_ascii_digit()) => text.parse().ok(),
            _ => None,
        }
    }
}
