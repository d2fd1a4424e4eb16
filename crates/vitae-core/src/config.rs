use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Top-level configuration for the Vitae service.
///
/// Loaded from `vitae.toml` by default. Every section is optional in the
/// file; missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitaeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl VitaeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: VitaeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Requests per second allowed on `/api/*` routes.
    pub rate_limit_per_sec: u64,
    /// Origins allowed by CORS (the site front-end).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
            rate_limit_per_sec: 100,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// Location of the profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Path to the JSON profile record.
    pub path: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: "data/cv.json".to_string(),
        }
    }
}

/// Wording used by the chat replies that is not part of the profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Company name of the AI chatbot position, matched exactly against
    /// `experience[].company`.
    pub ai_employer: String,
    /// Employer name as written in the profile summary.
    pub ai_employer_name: String,
    /// Role title used in the profile summary.
    pub ai_role: String,
    /// Clause describing the AI work, appended after the employer.
    pub ai_focus: String,
    /// Secondary (teaching) role mentioned in the summary.
    pub secondary_role: String,
    /// Closing sentence of the summary.
    pub background: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            ai_employer: "Connecthink Innovation, S.L.".to_string(),
            ai_employer_name: "Connecthink Innovation".to_string(),
            ai_role: "an AI Chatbot Developer".to_string(),
            ai_focus: "developing enterprise AI chatbots with RAG architectures using LangGraph, LlamaIndex, and pgvector".to_string(),
            secondary_role: "a University Collaborator teaching mathematics in the AI degree program".to_string(),
            background: "Strong background in software engineering, data, and business strategy.".to_string(),
        }
    }
}
