//! Wire and transcript types for the chat interface.

use serde::{Deserialize, Serialize};

/// Inbound chat request, as posted by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Opaque token owned by the caller. Defaults to empty when omitted.
    #[serde(default)]
    pub conversation_id: String,
}

/// Reply to a [`ChatRequest`]. `conversation_id` is echoed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry of a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Epoch seconds.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","conversationId":"abc"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert_eq!(req.conversation_id, "abc");
    }

    #[test]
    fn test_request_conversation_id_optional() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.conversation_id, "");
    }

    #[test]
    fn test_request_missing_message_fails() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"conversationId":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let resp = ChatResponse {
            reply: "hello".to_string(),
            conversation_id: "abc".to_string(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["reply"], "hello");
        assert_eq!(value["conversationId"], "abc");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
