//! Assistant modes and the message tag rule
//!
//! Outgoing messages carry the active mode as a bracketed, upper-cased
//! prefix followed by one space, e.g. `[GOALS] write my Q3 goals`.

use serde::{Deserialize, Serialize};

use crate::consts::BUTTON_ID_PREFIX;

/// Assistant persona selected on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Writing and achieving work goals
    #[default]
    Goals,
    /// Giving and receiving professional feedback
    Feedback,
    /// Self-assessment and reflection
    #[serde(rename = "self")]
    SelfAssessment,
}

impl Mode {
    /// All modes in button order
    pub const ALL: [Mode; 3] = [Mode::Goals, Mode::Feedback, Mode::SelfAssessment];

    /// Key used in storage, element ids, and the message tag
    pub fn key(&self) -> &'static str {
        match self {
            Mode::Goals => "goals",
            Mode::Feedback => "feedback",
            Mode::SelfAssessment => "self",
        }
    }

    /// Exact key match; anything else is not a known mode
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Goals => "Goals",
            Mode::Feedback => "Feedback",
            Mode::SelfAssessment => "Self-Assessment",
        }
    }

    /// Caption shown under the buttons in the enhanced layout
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Goals => "Write and achieve your work goals.",
            Mode::Feedback => "Give and receive professional feedback.",
            Mode::SelfAssessment => "Reflect on your work with a self-assessment.",
        }
    }

    /// System prompt the chat backend answers this mode with
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mode::Goals => {
                "You are Perform Assistant, a helpful AI assistant focused on helping users \
                 write and achieve their work goals."
            }
            Mode::Feedback => {
                "You are Perform Assistant, an expert in giving and receiving professional feedback."
            }
            Mode::SelfAssessment => {
                "You are Perform Assistant, an expert in self-assessment and reflection."
            }
        }
    }

    /// Element id of this mode's button
    pub fn button_id(&self) -> String {
        format!("{}{}", BUTTON_ID_PREFIX, self.key())
    }

    /// Message prefix for this mode, e.g. `[FEEDBACK] `
    pub fn tag(&self) -> String {
        tag_for(self.key())
    }
}

/// Message prefix for a raw stored mode value.
///
/// The stored value is opaque, so an unknown value still produces a tag.
pub fn tag_for(raw_mode: &str) -> String {
    format!("[{}] ", raw_mode.to_uppercase())
}

/// Prepend the mode tag unless the text already starts with it.
///
/// Returns `None` when the text is left unchanged.
pub fn apply_tag(raw_mode: &str, text: &str) -> Option<String> {
    let tag = tag_for(raw_mode);
    if text.starts_with(&tag) {
        None
    } else {
        Some(tag + text)
    }
}

/// A received chat message split into its mode and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub mode: Mode,
    pub body: String,
}

impl ParsedMessage {
    /// Split a tagged message.
    ///
    /// The tag is matched case-insensitively on the trimmed text, and the
    /// body ends at the first newline. Untagged messages fall back to
    /// `Goals` and keep their original text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        for mode in Mode::ALL {
            let tag = mode.tag();
            if let Some(head) = trimmed.get(..tag.len()) {
                if head.eq_ignore_ascii_case(&tag) {
                    let rest = &trimmed[tag.len()..];
                    let body = rest.split('\n').next().unwrap_or_default();
                    return Self {
                        mode,
                        body: body.to_string(),
                    };
                }
            }
        }

        Self {
            mode: Mode::default(),
            body: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_key(mode.key()), Some(mode));
        }
        assert_eq!(Mode::from_key("GOALS"), None);
        assert_eq!(Mode::from_key(""), None);
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(Mode::Goals.button_id(), "perform-btn-goals");
        assert_eq!(Mode::Feedback.button_id(), "perform-btn-feedback");
        assert_eq!(Mode::SelfAssessment.button_id(), "perform-btn-self");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Mode::SelfAssessment).unwrap();
        assert_eq!(json, "\"self\"");
        let mode: Mode = serde_json::from_str("\"feedback\"").unwrap();
        assert_eq!(mode, Mode::Feedback);
    }

    #[test]
    fn test_apply_tag() {
        assert_eq!(apply_tag("self", "hello").as_deref(), Some("[SELF] hello"));
        assert_eq!(apply_tag("self", "[SELF] hello"), None);
        // A different mode's tag is not recognised as ours
        assert_eq!(
            apply_tag("goals", "[SELF] hello").as_deref(),
            Some("[GOALS] [SELF] hello")
        );
        // Tag without the trailing space does not count
        assert_eq!(
            apply_tag("goals", "[GOALS]hi").as_deref(),
            Some("[GOALS] [GOALS]hi")
        );
    }

    #[test]
    fn test_tag_for_unknown_value() {
        assert_eq!(tag_for("custom"), "[CUSTOM] ");
    }

    #[test]
    fn test_parse_tagged() {
        let msg = ParsedMessage::parse("[FEEDBACK] how did my demo go?");
        assert_eq!(msg.mode, Mode::Feedback);
        assert_eq!(msg.body, "how did my demo go?");

        let msg = ParsedMessage::parse("  [self] my quarter  ");
        assert_eq!(msg.mode, Mode::SelfAssessment);
        assert_eq!(msg.body, "my quarter");
    }

    #[test]
    fn test_parse_untagged_defaults_to_goals() {
        let msg = ParsedMessage::parse(" plain question ");
        assert_eq!(msg.mode, Mode::Goals);
        assert_eq!(msg.body, " plain question ");

        let msg = ParsedMessage::parse("[OTHER] text");
        assert_eq!(msg.mode, Mode::Goals);
        assert_eq!(msg.body, "[OTHER] text");
    }

    #[test]
    fn test_parse_tagged_body_stops_at_newline() {
        let msg = ParsedMessage::parse("[GOALS] line1\nline2");
        assert_eq!(msg.mode, Mode::Goals);
        assert_eq!(msg.body, "line1");

        // Carriage returns are part of the line
        let msg = ParsedMessage::parse("[feedback] a\r\nb");
        assert_eq!(msg.mode, Mode::Feedback);
        assert_eq!(msg.body, "a\r");

        // Untagged messages keep every line
        let msg = ParsedMessage::parse("line1\nline2");
        assert_eq!(msg.body, "line1\nline2");
    }

    proptest! {
        #[test]
        fn prop_apply_tag_is_idempotent(text in ".*", idx in 0usize..3) {
            let mode = Mode::ALL[idx];
            let once = apply_tag(mode.key(), &text).unwrap_or_else(|| text.clone());
            prop_assert!(once.starts_with(&mode.tag()));
            prop_assert_eq!(apply_tag(mode.key(), &once), None);
        }

        #[test]
        fn prop_tagged_message_parses_back(body in "[a-z][a-z ]{0,20}[a-z]", idx in 0usize..3) {
            let mode = Mode::ALL[idx];
            let text = apply_tag(mode.key(), &body).unwrap();
            let parsed = ParsedMessage::parse(&text);
            prop_assert_eq!(parsed.mode, mode);
            prop_assert_eq!(parsed.body, body);
        }
    }
}
