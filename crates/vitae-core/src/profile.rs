//! The profile record: an immutable, structured CV document.
//!
//! The record is parsed from JSON once at startup by [`ProfileStore`],
//! validated, and then shared read-only (typically behind an `Arc`) by every
//! consumer. Sequence order in the document is display order and is never
//! changed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, VitaeError};

// =============================================================================
// Record types
// =============================================================================

/// Root entity of the profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile: Identity,
    pub summary: Vec<String>,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<NamedEntry>,
    #[serde(default)]
    pub extracurricular: Vec<NamedEntry>,
}

/// Identity block of the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// The four skill groups. Each list is in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub methods: Vec<String>,
}

/// A position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Stable identifier, unique within `experience`.
    pub id: String,
    pub company: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A project. Same shape as [`Experience`] with `name`/`type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub program: String,
    pub school: String,
    pub start: String,
    pub end: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub language: String,
    pub proficiency: String,
}

/// Awards and extracurricular activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub id: String,
    pub name: String,
    pub description: String,
}

// =============================================================================
// Derived views
// =============================================================================

/// Headline counts shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub positions: usize,
    pub projects: usize,
    /// Programming languages plus frameworks.
    pub technologies: usize,
    pub certifications: usize,
    pub languages: usize,
}

/// Experience and project ids tagged with a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHighlights {
    pub skill: String,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
}

impl ProfileRecord {
    /// Parse and validate a profile document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let record: ProfileRecord = serde_json::from_str(content)
            .map_err(|e| VitaeError::Profile(format!("malformed profile document: {}", e)))?;
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("profile.name", &self.profile.name),
            ("profile.headline", &self.profile.headline),
            ("profile.location", &self.profile.location),
            ("profile.email", &self.profile.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(VitaeError::Profile(format!("{} must not be blank", field)));
            }
        }

        ensure_unique_ids("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }

    /// First word of the profile name, used to address the subject.
    pub fn first_name(&self) -> &str {
        self.profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&self.profile.name)
    }

    /// Languages, frameworks and tools in display order.
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.skills
            .languages
            .iter()
            .chain(&self.skills.frameworks)
            .chain(&self.skills.tools)
            .map(String::as_str)
    }

    /// Experience entry whose company equals `company` exactly.
    pub fn experience_at(&self, company: &str) -> Option<&Experience> {
        self.experience.iter().find(|e| e.company == company)
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            positions: self.experience.len(),
            projects: self.projects.len(),
            technologies: self.skills.languages.len() + self.skills.frameworks.len(),
            certifications: self.certifications.len(),
            languages: self.languages.len(),
        }
    }

    /// Whether `skill` appears in any skill group (case-insensitive).
    pub fn is_known_skill(&self, skill: &str) -> bool {
        let wanted = skill.to_lowercase();
        self.technologies()
            .chain(self.skills.methods.iter().map(String::as_str))
            .any(|s| s.to_lowercase() == wanted)
    }

    /// Entries tagged with `skill`, or `None` if the skill is unknown.
    pub fn skill_highlights(&self, skill: &str) -> Option<SkillHighlights> {
        if !self.is_known_skill(skill) {
            return None;
        }
        let wanted = skill.to_lowercase();
        let tagged = |tags: &[String]| tags.iter().any(|t| t.to_lowercase() == wanted);

        Some(SkillHighlights {
            skill: skill.to_string(),
            experience: self
                .experience
                .iter()
                .filter(|e| tagged(e.tags.as_slice()))
                .map(|e| e.id.clone())
                .collect(),
            projects: self
                .projects
                .iter()
                .filter(|p| tagged(p.tags.as_slice()))
                .map(|p| p.id.clone())
                .collect(),
        })
    }
}

fn ensure_unique_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(VitaeError::Profile(format!(
                "duplicate id '{}' in {}",
                id, section
            )));
        }
    }
    Ok(())
}

// =============================================================================
// ProfileStore
// =============================================================================

/// Read-only source of the profile record.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the profile document.
    ///
    /// Intended to run once before serving. Every failure maps to
    /// [`VitaeError::Profile`].
    pub fn load(&self) -> Result<ProfileRecord> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            VitaeError::Profile(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let record = ProfileRecord::from_json_str(&content).map_err(|e| match e {
            VitaeError::Profile(msg) => {
                VitaeError::Profile(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;
        info!(
            path = %self.path.display(),
            experience = record.experience.len(),
            projects = record.projects.len(),
            "Profile loaded"
        );
        Ok(record)
    }
}
