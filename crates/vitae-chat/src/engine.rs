//! Response engine: classifies a message and renders the reply.
//!
//! The engine holds only immutable data, so `respond` is a pure function of
//! its arguments and may be called concurrently through a shared reference.

use std::sync::Arc;

use vitae_core::config::ChatConfig;
use vitae_core::profile::ProfileRecord;

use crate::intent::{self, Intent};
use crate::response::ReplyComposer;
use crate::types::ChatResponse;

/// Stateless keyword-routed responder over a profile record.
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    profile: Arc<ProfileRecord>,
    chat: ChatConfig,
}

impl ResponseEngine {
    pub fn new(profile: Arc<ProfileRecord>, chat: ChatConfig) -> Self {
        Self { profile, chat }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Answer `message`, echoing `conversation_id` unchanged.
    pub fn respond(&self, message: &str, conversation_id: &str) -> ChatResponse {
        let (intent, reply) = self.reply(message);
        tracing::debug!(?intent, reply_len = reply.len(), "Chat reply composed");
        ChatResponse {
            reply,
            conversation_id: conversation_id.to_string(),
        }
    }

    /// Classify and render, returning the intent that produced the text.
    ///
    /// When the matched intent cannot be answered from the profile the help
    /// text is returned and the intent reported is [`Intent::Help`].
    pub fn reply(&self, message: &str) -> (Intent, String) {
        let composer = ReplyComposer::new(&self.profile, &self.chat);
        let intent = intent::classify(message);
        match composer.compose(intent) {
            Some(reply) => (intent, reply),
            None => {
                tracing::debug!(?intent, "No profile entry for intent, answering with help");
                (Intent::Help, composer.help())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn experience(id: &str, company: &str, title: &str, start: &str, end: &str) -> serde_json::Value {
        json!({
            "id": id, "company": company, "title": title,
            "start": start, "end": end,
            "bullets": [format!("{} bullet one", id), format!("{} bullet two", id)],
            "tags": []
        })
    }

    fn profile_value() -> serde_json::Value {
        json!({
            "profile": {
                "name": "Blanca Ortega",
                "headline": "AI Engineer",
                "location": "Madrid, Spain",
                "email": "blanca@example.com"
            },
            "summary": ["Engineer."],
            "skills": {
                "languages": ["Python", "TypeScript"],
                "frameworks": ["LangGraph", "FastAPI"],
                "tools": ["Docker", "Git"],
                "methods": ["Agile", "Scrum"]
            },
            "experience": [
                experience("ai", "Connecthink Innovation, S.L.", "AI Chatbot Developer", "2024", "Present"),
                experience("uni", "Universidad Europea", "University Collaborator", "2023", "Present"),
                experience("old", "Strategy Partners", "Data Analyst", "2021", "2023")
            ],
            "education": [
                {
                    "id": "msc", "program": "MSc in AI", "school": "UPM",
                    "start": "2022", "end": "2023", "description": "NLP focus."
                },
                {
                    "id": "bsc", "program": "BSc in Mathematics", "school": "UCM",
                    "start": "2017", "end": "2021", "description": "Maths."
                }
            ],
            "certifications": [
                { "id": "c1", "name": "AWS Cloud Practitioner" },
                { "id": "c2", "name": "PSM I" }
            ],
            "languages": [
                { "language": "English", "proficiency": "Native" },
                { "language": "Spanish", "proficiency": "Fluent" }
            ]
        })
    }

    fn engine_from(value: serde_json::Value) -> ResponseEngine {
        let record: ProfileRecord = serde_json::from_value(value).unwrap();
        ResponseEngine::new(Arc::new(record), ChatConfig::default())
    }

    fn engine() -> ResponseEngine {
        engine_from(profile_value())
    }

    fn reply(engine: &ResponseEngine, message: &str) -> String {
        engine.respond(message, "c-1").reply
    }

    const HELP: &str = "I can help you learn about Blanca's experience, skills, education, and more. Try asking about:\n\n• AI chatbot experience\n• Technical skills\n• Education background\n• Languages and certifications\n• How to download the CV\n\nWhat would you like to know?";

    // ---- Summary ----

    #[test]
    fn test_summary_contains_name_and_location() {
        let e = engine();
        for message in ["summary", "Please SUMMARIZE her profile", "xx summaryxx"] {
            let r = reply(&e, message);
            assert!(r.contains("Blanca Ortega"), "{message}");
            assert!(r.contains("Madrid, Spain"), "{message}");
        }
    }

    #[test]
    fn test_summary_mentions_employer_and_teaching() {
        let r = reply(&engine(), "summary");
        assert!(r.contains("at Connecthink Innovation, developing"));
        assert!(!r.contains("S.L."));
        assert!(r.contains("University Collaborator"));
    }

    #[test]
    fn test_summary_of_bundled_profile_with_default_wording() {
        let record = ProfileRecord::from_json_str(include_str!("../../../data/cv.json")).unwrap();
        let engine = ResponseEngine::new(Arc::new(record), ChatConfig::default());
        assert_eq!(
            reply(&engine, "summary"),
            "Blanca Ortega is a AI Engineer & Software Developer based in Madrid, Spain. \
             Currently working as an AI Chatbot Developer at Connecthink Innovation, \
             developing enterprise AI chatbots with RAG architectures using LangGraph, \
             LlamaIndex, and pgvector. Also serves as a University Collaborator teaching \
             mathematics in the AI degree program. Strong background in software \
             engineering, data, and business strategy."
        );
    }

    // ---- Skills ----

    #[test]
    fn test_skills_lists_each_technology_once_in_order() {
        let r = reply(&engine(), "Show me your SKILLS please");
        assert_eq!(
            r,
            "Technical skills include: Python, TypeScript, LangGraph, FastAPI, Docker, Git. Also proficient in Agile, Scrum."
        );
        for tech in ["Python", "TypeScript", "LangGraph", "FastAPI", "Docker", "Git"] {
            assert_eq!(r.matches(tech).count(), 1, "{tech}");
        }
    }

    // ---- AI experience ----

    #[test]
    fn test_ai_branch_renders_bullets() {
        let r = reply(&engine(), "Highlight AI chatbot experience");
        assert_eq!(
            r,
            "AI Chatbot Developer at Connecthink Innovation, S.L. (2024 - Present):\n\nai bullet one\nai bullet two"
        );
    }

    #[test]
    fn test_ai_beats_experience() {
        let r = reply(&engine(), "what experience do you have with ai?");
        assert!(r.starts_with("AI Chatbot Developer at Connecthink"));
    }

    #[test]
    fn test_ai_lookup_miss_returns_help() {
        let mut value = profile_value();
        value["experience"][0]["company"] = json!("Someone Else");
        let e = engine_from(value);
        let (intent, text) = e.reply("chatbot");
        assert_eq!(intent, Intent::Help);
        assert_eq!(text, HELP);
    }

    // ---- Download ----

    #[test]
    fn test_download_fixed_text() {
        assert_eq!(reply(&engine(), "Download CV"), crate::response::DOWNLOAD_REPLY);
        assert_eq!(reply(&engine(), "resume?"), crate::response::DOWNLOAD_REPLY);
    }

    // ---- Education ----

    #[test]
    fn test_education_first_entry_only() {
        let r = reply(&engine(), "education");
        assert_eq!(r, "MSc in AI from UPM (2022 - 2023). NLP focus.");
        assert!(!r.contains("BSc"));
    }

    // ---- Languages ----

    #[test]
    fn test_languages_scenario() {
        let r = reply(&engine(), "What languages do you speak?");
        assert_eq!(r, "Languages: English (Native), Spanish (Fluent)");
    }

    // ---- Certifications ----

    #[test]
    fn test_certifications_joined() {
        let r = reply(&engine(), "Which certifications?");
        assert_eq!(r, "Certifications: AWS Cloud Practitioner, PSM I");
    }

    // ---- Experience ----

    #[test]
    fn test_experience_only_first_two() {
        let r = reply(&engine(), "tell me about your experience");
        assert_eq!(
            r,
            "Current positions:\n\n1. AI Chatbot Developer at Connecthink Innovation, S.L. (2024 - Present)\n\n2. University Collaborator at Universidad Europea (2023 - Present)"
        );
        assert!(!r.contains("Data Analyst"));
        assert!(!r.contains("3."));
    }

    // ---- Contact ----

    #[test]
    fn test_contact_sentence() {
        assert_eq!(
            reply(&engine(), "How can I contact you?"),
            "You can reach out via email at blanca@example.com"
        );
    }

    // ---- Default ----

    #[test]
    fn test_unmatched_returns_help_verbatim() {
        assert_eq!(reply(&engine(), "asdkjasd"), HELP);
    }

    #[test]
    fn test_empty_and_whitespace_return_help() {
        assert_eq!(reply(&engine(), ""), HELP);
        assert_eq!(reply(&engine(), "   \n"), HELP);
    }

    // ---- Purity ----

    #[test]
    fn test_identical_input_identical_output() {
        let e = engine();
        for message in ["summary", "skills", "experience", "asdkjasd"] {
            assert_eq!(e.respond(message, "x"), e.respond(message, "x"));
        }
    }

    #[test]
    fn test_conversation_id_echoed() {
        let e = engine();
        for id in ["", "session-1700000000", "  opaque \u{1F600} token  "] {
            assert_eq!(e.respond("skills", id).conversation_id, id);
            assert_eq!(e.respond("asdkjasd", id).conversation_id, id);
        }
    }

    #[test]
    fn test_profile_strings_not_case_folded() {
        let r = reply(&engine(), "SKILLS");
        assert!(r.contains("TypeScript"));
        assert!(!r.contains("typescript"));
    }
}
