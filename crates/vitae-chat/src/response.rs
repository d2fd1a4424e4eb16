//! Reply composition for each intent.
//!
//! Composes human-readable answers by interpolating profile fields into
//! fixed templates. Profile strings are used verbatim.

use vitae_core::config::ChatConfig;
use vitae_core::profile::ProfileRecord;

use crate::intent::Intent;

/// Fixed reply for download requests.
pub const DOWNLOAD_REPLY: &str = "You can download the full CV in PDF format by clicking the 'Download CV' button on the CV page, or scroll down to explore the interactive CV below!";

// =============================================================================
// ReplyComposer
// =============================================================================

/// Renders replies from a profile record and the chat wording config.
pub struct ReplyComposer<'a> {
    profile: &'a ProfileRecord,
    chat: &'a ChatConfig,
}

impl<'a> ReplyComposer<'a> {
    pub fn new(profile: &'a ProfileRecord, chat: &'a ChatConfig) -> Self {
        Self { profile, chat }
    }

    /// Compose the reply for `intent`.
    ///
    /// Returns `None` when the intent needs an entry the profile does not
    /// have; callers answer with [`ReplyComposer::help`] in that case.
    pub fn compose(&self, intent: Intent) -> Option<String> {
        match intent {
            Intent::Summary => Some(self.summary()),
            Intent::Skills => Some(self.skills()),
            Intent::AiExperience => self.ai_experience(),
            Intent::Download => Some(DOWNLOAD_REPLY.to_string()),
            Intent::Education => self.education(),
            Intent::Languages => Some(self.languages()),
            Intent::Certifications => Some(self.certifications()),
            Intent::Experience => self.experience(),
            Intent::Contact => Some(self.contact()),
            Intent::Help => Some(self.help()),
        }
    }

    pub fn summary(&self) -> String {
        let p = &self.profile.profile;
        format!(
            "{} is a {} based in {}. Currently working as {} at {}, {}. Also serves as {}. {}",
            p.name,
            p.headline,
            p.location,
            self.chat.ai_role,
            self.chat.ai_employer_name,
            self.chat.ai_focus,
            self.chat.secondary_role,
            self.chat.background,
        )
    }

    pub fn skills(&self) -> String {
        let technologies: Vec<&str> = self.profile.technologies().collect();
        format!(
            "Technical skills include: {}. Also proficient in {}.",
            technologies.join(", "),
            self.profile.skills.methods.join(", ")
        )
    }

    pub fn ai_experience(&self) -> Option<String> {
        let exp = self.profile.experience_at(&self.chat.ai_employer)?;
        Some(format!(
            "{} at {} ({}):\n\n{}",
            exp.title,
            exp.company,
            date_range(&exp.start, &exp.end),
            exp.bullets.join("\n")
        ))
    }

    /// First education entry only.
    pub fn education(&self) -> Option<String> {
        let edu = self.profile.education.first()?;
        Some(format!(
            "{} from {} ({}). {}",
            edu.program,
            edu.school,
            date_range(&edu.start, &edu.end),
            edu.description
        ))
    }

    pub fn languages(&self) -> String {
        let langs: Vec<String> = self
            .profile
            .languages
            .iter()
            .map(|l| format!("{} ({})", l.language, l.proficiency))
            .collect();
        format!("Languages: {}", langs.join(", "))
    }

    pub fn certifications(&self) -> String {
        let names: Vec<&str> = self
            .profile
            .certifications
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        format!("Certifications: {}", names.join(", "))
    }

    /// The first two positions, numbered from 1.
    pub fn experience(&self) -> Option<String> {
        if self.profile.experience.is_empty() {
            return None;
        }
        let entries: Vec<String> = self
            .profile
            .experience
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, exp)| {
                format!(
                    "{}. {} at {} ({})",
                    i + 1,
                    exp.title,
                    exp.company,
                    date_range(&exp.start, &exp.end)
                )
            })
            .collect();
        Some(format!("Current positions:\n\n{}", entries.join("\n\n")))
    }

    pub fn contact(&self) -> String {
        format!(
            "You can reach out via email at {}",
            self.profile.profile.email
        )
    }

    pub fn help(&self) -> String {
        format!(
            "I can help you learn about {}'s experience, skills, education, and more. Try asking about:\n\n\
             • AI chatbot experience\n\
             • Technical skills\n\
             • Education background\n\
             • Languages and certifications\n\
             • How to download the CV\n\n\
             What would you like to know?",
            self.profile.first_name()
        )
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn date_range(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}

// =============================================================================
// Tests
// =============================================================================
