pub mod config;
pub mod error;
pub mod profile;

pub use config::VitaeConfig;
pub use error::{Result, VitaeError};
pub use profile::{ProfileRecord, ProfileStore, QuickStats, SkillHighlights};
