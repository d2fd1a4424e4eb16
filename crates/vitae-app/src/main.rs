//! Vitae application binary - composition root.
//!
//! 1. Parse the command line and initialise tracing
//! 2. Load configuration from TOML
//! 3. Load and validate the profile record (fatal on failure)
//! 4. Serve the API, answer one message, or run a terminal chat

mod cli;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use vitae_api::state::AppState;
use vitae_chat::{ChatError, ChatSession, ResponseEngine, QUICK_ACTIONS};
use vitae_core::config::VitaeConfig;
use vitae_core::profile::ProfileStore;

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists so that its log level applies.
    let config_file = args.resolve_config_path();
    let (mut config, config_error) = match VitaeConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (VitaeConfig::default(), Some(e)),
    };

    // Tracing. RUST_LOG wins over --log-level, which wins over the config.
    let default_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Vitae v{}", env!("CARGO_PKG_VERSION"));
    match config_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    config.server.port = args.resolve_port(config.server.port);
    let profile_path = args.resolve_profile_path(&config.profile.path);
    config.profile.path = profile_path.to_string_lossy().to_string();

    // Profile. A missing or invalid document is fatal.
    let profile = match ProfileStore::new(profile_path.clone()).load() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(path = %profile_path.display(), error = %e, "Failed to load profile");
            return Err(e.into());
        }
    };

    match args.command() {
        Command::Serve => {
            let state = AppState::new(config.clone(), profile);
            vitae_api::start_server(&config, state).await?;
        }
        Command::Ask {
            message,
            conversation_id,
        } => {
            let engine = ResponseEngine::new(Arc::new(profile), config.chat.clone());
            let response = engine.respond(&message, &conversation_id);
            println!("{}", response.reply);
        }
        Command::Chat => {
            let engine = ResponseEngine::new(Arc::new(profile), config.chat.clone());
            run_terminal_chat(&engine).await?;
        }
    }

    Ok(())
}

/// Read messages from stdin until `/quit` or EOF.
async fn run_terminal_chat(engine: &ResponseEngine) -> std::io::Result<()> {
    let mut session = ChatSession::new(engine.profile().first_name());
    tracing::debug!(conversation_id = %session.conversation_id(), "Terminal chat started");

    for message in session.transcript() {
        println!("{}", message.content);
    }
    println!("Try: {}", QUICK_ACTIONS.join(" | "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        match session.submit(&line, engine) {
            Ok(reply) => println!("\n{}\n", reply.content),
            Err(ChatError::EmptyMessage) => continue,
            Err(e) => tracing::warn!(error = %e, "Chat turn rejected"),
        }
    }

    tracing::debug!(
        messages = session.transcript().len(),
        "Terminal chat ended"
    );
    Ok(())
}
