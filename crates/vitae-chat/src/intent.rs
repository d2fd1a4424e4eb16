//! Keyword-based intent classification.
//!
//! Intents are detected by case-insensitive substring tests over the user's
//! message. Rules are evaluated in table order and the first match wins, so
//! the position of a rule in [`INTENT_RULES`] is its priority.

use serde::Serialize;

/// What the user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Summary,
    Skills,
    AiExperience,
    Download,
    Education,
    Languages,
    Certifications,
    Experience,
    Contact,
    /// No rule matched.
    Help,
}

/// A single rule: any keyword contained in the message selects the intent.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// Whether any keyword occurs in an already lowercased message.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered rule table. Do not reorder: "ai" must be tested before
/// "experience" and before "email".
pub const INTENT_RULES: [IntentRule; 9] = [
    IntentRule {
        intent: Intent::Summary,
        keywords: &["summarize", "summary"],
    },
    IntentRule {
        intent: Intent::Skills,
        keywords: &["skill"],
    },
    IntentRule {
        intent: Intent::AiExperience,
        keywords: &["ai", "chatbot"],
    },
    IntentRule {
        intent: Intent::Download,
        keywords: &["download", "cv", "resume"],
    },
    IntentRule {
        intent: Intent::Education,
        keywords: &["education"],
    },
    IntentRule {
        intent: Intent::Languages,
        keywords: &["language"],
    },
    IntentRule {
        intent: Intent::Certifications,
        keywords: &["certification"],
    },
    IntentRule {
        intent: Intent::Experience,
        keywords: &["experience"],
    },
    IntentRule {
        intent: Intent::Contact,
        keywords: &["contact", "email"],
    },
];

/// Classify a raw message. Never fails; unmatched input yields [`Intent::Help`].
pub fn classify(message: &str) -> Intent {
    let lowered = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Help)
}
