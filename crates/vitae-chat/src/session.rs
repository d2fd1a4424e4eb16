//! Presentation-side conversation state.
//!
//! A [`ChatSession`] owns what the chat widget shows: the transcript, the
//! loading indicator and the focus (terminal) mode. The response engine
//! never sees it. A turn is split into [`ChatSession::begin`] and
//! [`ChatSession::complete`] / [`ChatSession::fail`] so that callers can put
//! any transport between the two; [`ChatSession::submit`] does all three
//! against an in-process engine.

use chrono::Utc;
use uuid::Uuid;

use crate::engine::ResponseEngine;
use crate::error::ChatError;
use crate::types::{ChatMessage, ChatRequest, Role};

/// Canned prompts offered under the transcript.
pub const QUICK_ACTIONS: [&str; 4] = [
    "Summarize my profile",
    "Show skills",
    "Highlight AI chatbot experience",
    "Download CV",
];

/// Shown when the engine returned an empty reply.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Shown when the request never produced a reply.
pub const TRANSPORT_ERROR_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// One conversation as seen by the widget.
#[derive(Debug, Clone)]
pub struct ChatSession {
    conversation_id: String,
    transcript: Vec<ChatMessage>,
    loading: bool,
    focus_mode: bool,
}

impl ChatSession {
    /// Start a session greeting `first_name`.
    pub fn new(first_name: &str) -> Self {
        Self::with_conversation_id(first_name, format!("session-{}", Uuid::new_v4()))
    }

    pub fn with_conversation_id(first_name: &str, conversation_id: impl Into<String>) -> Self {
        let greeting = format!(
            "Hi! I'm here to help you learn about {}'s experience and skills. What would you like to know?",
            first_name
        );
        Self {
            conversation_id: conversation_id.into(),
            transcript: vec![message(Role::Assistant, greeting)],
            loading: false,
            focus_mode: false,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn toggle_focus_mode(&mut self) {
        self.focus_mode = !self.focus_mode;
    }

    /// Record the user's message and return the request to send.
    ///
    /// Blank input is rejected without touching the session. An accepted
    /// message switches focus mode on if it was off.
    pub fn begin(&mut self, text: &str) -> Result<ChatRequest, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.loading {
            return Err(ChatError::Busy(self.conversation_id.clone()));
        }

        self.transcript.push(message(Role::User, trimmed.to_string()));
        self.loading = true;
        self.focus_mode = true;

        Ok(ChatRequest {
            message: trimmed.to_string(),
            conversation_id: self.conversation_id.clone(),
        })
    }

    /// Append the assistant reply and clear the loading flag.
    pub fn complete(&mut self, reply: &str) -> &ChatMessage {
        let content = if reply.is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            reply.to_string()
        };
        self.finish(content)
    }

    /// Append the transport error notice and clear the loading flag.
    pub fn fail(&mut self) -> &ChatMessage {
        self.finish(TRANSPORT_ERROR_REPLY.to_string())
    }

    /// Run a full turn against `engine`.
    pub fn submit(&mut self, text: &str, engine: &ResponseEngine) -> Result<&ChatMessage, ChatError> {
        let request = self.begin(text)?;
        let response = engine.respond(&request.message, &request.conversation_id);
        Ok(self.complete(&response.reply))
    }

    fn finish(&mut self, content: String) -> &ChatMessage {
        self.loading = false;
        self.transcript.push(message(Role::Assistant, content));
        let last = self.transcript.len() - 1;
        &self.transcript[last]
    }
}

fn message(role: Role, content: String) -> ChatMessage {
    ChatMessage {
        role,
        content,
        created_at: Utc::now().timestamp(),
    }
}
