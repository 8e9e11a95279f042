//! Assistant personas behind each mode
//!
//! The chat backend strips the mode tag off a message and answers with the
//! persona for that mode. `ChatRequest` is the completion payload it sends.

use serde::{Deserialize, Serialize};

use crate::mode::{Mode, ParsedMessage};

/// Model used by every persona
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-instruct";
/// Completion length cap
pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

/// System prompt for a mode key the backend does not know
pub const FALLBACK_PROMPT: &str =
    "You are Perform Assistant, a helpful AI assistant for professional development.";

/// Prompt and sampling settings for one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Persona {
    pub system_prompt: &'static str,
    pub model: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Persona {
    pub fn for_mode(mode: Mode) -> Self {
        Self::with_prompt(mode.system_prompt())
    }

    /// Persona for a raw mode key; unknown keys get the general prompt
    pub fn for_key(key: &str) -> Self {
        Mode::from_key(&key.to_lowercase())
            .map(Self::for_mode)
            .unwrap_or_else(Self::fallback)
    }

    pub fn fallback() -> Self {
        Self::with_prompt(FALLBACK_PROMPT)
    }

    fn with_prompt(system_prompt: &'static str) -> Self {
        Self {
            system_prompt,
            model: DEFAULT_MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chat completion request for one user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// Build the request for a raw (possibly tagged) chat message
    pub fn for_message(text: &str) -> Self {
        let parsed = ParsedMessage::parse(text);
        Self::new(&Persona::for_mode(parsed.mode), parsed.body)
    }

    pub fn new(persona: &Persona, user_text: impl Into<String>) -> Self {
        Self {
            model: persona.model.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: persona.system_prompt.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user_text.into(),
                },
            ],
            max_tokens: persona.max_tokens,
            temperature: persona.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_mode_has_its_own_prompt() {
        let prompts: Vec<_> = Mode::ALL
            .into_iter()
            .map(|m| Persona::for_mode(m).system_prompt)
            .collect();
        assert_eq!(prompts.len(), 3);
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(prompts.iter().all(|p| *p != FALLBACK_PROMPT));
        assert!(prompts[1].contains("feedback"));
        assert!(prompts[2].contains("self-assessment"));
    }

    #[test]
    fn test_unknown_key_uses_fallback() {
        assert_eq!(Persona::for_key("coach"), Persona::fallback());
        assert_eq!(Persona::for_key(""), Persona::fallback());
        assert_eq!(
            Persona::for_key("FEEDBACK"),
            Persona::for_mode(Mode::Feedback)
        );
    }

    #[test]
    fn test_request_for_tagged_message() {
        let request = ChatRequest::for_message("[SELF] how was my quarter?");
        assert_eq!(request.model, "llama-3.3-70b-instruct");
        assert_eq!(request.max_tokens, 500);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(
            request.messages[0].content,
            Mode::SelfAssessment.system_prompt()
        );
        assert_eq!(request.messages[1].content, "how was my quarter?");
    }

    #[test]
    fn test_request_for_untagged_message_uses_goals() {
        let request = ChatRequest::for_message("draft a goal");
        assert_eq!(request.messages[0].content, Mode::Goals.system_prompt());
        assert_eq!(request.messages[1].content, "draft a goal");
    }

    #[test]
    fn test_request_serializes_roles_lowercase() {
        let request = ChatRequest::for_message("[FEEDBACK] hi");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["model"], DEFAULT_MODEL);
    }
}
