//! Error types for the conversational interface.

/// Errors from a chat session.
///
/// The response engine itself never fails; these cover misuse of the
/// session object by the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("a reply is already pending for conversation {0}")]
    Busy(String),
}
