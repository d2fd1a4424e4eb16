//! CLI argument definitions for the Vitae binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae: CV chat service answering questions about a profile record.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Path to the profile JSON document.
    #[arg(long = "profile")]
    pub profile: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Answer a single message and exit.
    Ask {
        /// The message to answer.
        message: String,
        /// Conversation identifier echoed in the output.
        #[arg(long = "conversation-id", default_value = "")]
        conversation_id: String,
    },
    /// Interactive chat session on the terminal.
    Chat,
}

impl CliArgs {
    /// The subcommand to run, `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > VITAE_CONFIG env var > ./vitae.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("VITAE_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("vitae.toml")
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > VITAE_PORT env var > config file value > 3030.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("VITAE_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        3030
    }

    /// Resolve the profile document path.
    ///
    /// Priority: --profile flag > VITAE_PROFILE env var > config file value.
    pub fn resolve_profile_path(&self, config_path: &str) -> PathBuf {
        if let Some(ref p) = self.profile {
            return p.clone();
        }
        if let Ok(p) = std::env::var("VITAE_PROFILE") {
            return PathBuf::from(p);
        }
        PathBuf::from(config_path)
    }

    /// Resolve the log level.
    ///
    /// Returns `None` if not overridden on the command line.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("vitae").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_command_is_serve() {
        assert_eq!(parse(&[]).command(), Command::Serve);
    }

    #[test]
    fn test_ask_command() {
        let args = parse(&["ask", "Show skills", "--conversation-id", "cli-1"]);
        assert_eq!(
            args.command(),
            Command::Ask {
                message: "Show skills".to_string(),
                conversation_id: "cli-1".to_string(),
            }
        );
    }

    #[test]
    fn test_ask_conversation_id_defaults_empty() {
        let args = parse(&["ask", "hello"]);
        assert!(matches!(
            args.command(),
            Command::Ask { conversation_id, .. } if conversation_id.is_empty()
        ));
    }

    #[test]
    fn test_flags_take_priority() {
        let args = parse(&[
            "--config",
            "/etc/vitae.toml",
            "--port",
            "9000",
            "--profile",
            "/srv/cv.json",
            "--log-level",
            "debug",
            "chat",
        ]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/etc/vitae.toml"));
        assert_eq!(args.resolve_port(3030), 9000);
        assert_eq!(
            args.resolve_profile_path("data/cv.json"),
            PathBuf::from("/srv/cv.json")
        );
        assert_eq!(args.resolve_log_level().as_deref(), Some("debug"));
        assert_eq!(args.command(), Command::Chat);
    }
}
