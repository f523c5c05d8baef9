use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::ApiError;

/// First message of every conversation
pub const GREETING: &str = "Hello! I am your AI Business Analyst. How can I help you today?";

/// Shown instead of an answer when the request fails or comes back empty
pub const FALLBACK: &str = "Sorry, I am having trouble connecting to the server.";

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// Question this answer belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Uuid>,
}

impl ChatMessage {
    pub fn user(id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id,
            role: ChatRole::User,
            content: content.into(),
            reply_to: None,
        }
    }

    pub fn ai(content: impl Into<String>, reply_to: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Ai,
            content: content.into(),
            reply_to,
        }
    }
}

/// Body of `POST /api/chat`. The id stays on the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    #[serde(skip)]
    pub id: Uuid,
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Ordered conversation with at most one question awaiting an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    pending: Option<Uuid>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::ai(GREETING, None)],
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends the user's question and returns the request to send.
    ///
    /// Returns `None` for blank input or while a previous question is
    /// still unanswered.
    pub fn submit(&mut self, input: &str) -> Option<ChatRequest> {
        let question = input.trim();
        if question.is_empty() || self.pending.is_some() {
            return None;
        }

        let id = Uuid::new_v4();
        self.messages.push(ChatMessage::user(id, question));
        self.pending = Some(id);

        Some(ChatRequest {
            id,
            question: question.to_string(),
        })
    }

    /// Appends the answer to question `id`. Returns `false` if `id` is not
    /// the question being waited on.
    pub fn resolve(&mut self, id: Uuid, result: Result<ChatResponse, ApiError>) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let content = match result {
            Ok(ChatResponse {
                answer: Some(answer),
            }) => answer,
            Ok(_) | Err(_) => FALLBACK.to_string(),
        };
        self.messages.push(ChatMessage::ai(content, Some(id)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_matches_wire_form() {
        for role in [ChatRole::User, ChatRole::Ai] {
            let wire = serde_json::to_value(role).unwrap();
            assert_eq!(wire.as_str(), Some(role.as_str()));
        }
    }

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatTranscript::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, ChatRole::Ai);
        assert_eq!(chat.messages()[0].content, GREETING);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatTranscript::new();
        assert!(chat.submit("   \n").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_question_then_answer() {
        let mut chat = ChatTranscript::new();
        let request = chat.submit("  Top product this year?  ").unwrap();
        assert_eq!(request.question, "Top product this year?");
        assert!(chat.is_waiting());
        assert_eq!(chat.messages()[1].content, "Top product this year?");

        // one question at a time
        assert!(chat.submit("another").is_none());

        let answer = ChatResponse {
            answer: Some("Product A".into()),
        };
        assert!(chat.resolve(request.id, Ok(answer)));
        assert!(!chat.is_waiting());
        let last = chat.messages().last().unwrap();
        assert_eq!(last.content, "Product A");
        assert_eq!(last.reply_to, Some(request.id));
    }

    #[test]
    fn test_failures_get_fallback() {
        let mut chat = ChatTranscript::new();
        let request = chat.submit("hi").unwrap();
        chat.resolve(request.id, Err(ApiError::Network("offline".into())));
        assert_eq!(chat.messages().last().unwrap().content, FALLBACK);

        let request = chat.submit("hi again").unwrap();
        chat.resolve(request.id, Ok(ChatResponse::default()));
        assert_eq!(chat.messages().last().unwrap().content, FALLBACK);
        assert_eq!(chat.messages().len(), 5);
    }

    #[test]
    fn test_unknown_response_is_ignored() {
        let mut chat = ChatTranscript::new();
        let request = chat.submit("hi").unwrap();
        assert!(!chat.resolve(Uuid::new_v4(), Ok(ChatResponse::default())));
        assert!(chat.is_waiting());
        assert!(chat.resolve(request.id, Ok(ChatResponse::default())));
        assert!(!chat.resolve(request.id, Ok(ChatResponse::default())));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            id: Uuid::new_v4(),
            question: "Revenue?".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "question": "Revenue?" })
        );
    }
}
