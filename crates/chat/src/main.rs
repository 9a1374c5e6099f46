//! Deskmate chat entry point
//!
//! Reads one query per line from stdin and prints the engine's reply the way
//! the chat UI would: a typing pause scaled to the reply length, the text,
//! then the widget after a short delay. Lines starting with `/` are
//! commands (`/persona <id>`, `/mode scored|cascading`, `/quit`).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use deskmate_agent::{cs_manager_conversation, ConversationRegistry, DialogueSession, PersonaRouter};
use deskmate_config::{load_settings, ChatConfig, MatchMode, Settings};
use deskmate_core::{PersonaId, QueryMatch};

#[derive(Parser, Debug)]
#[command(name = "deskmate", version, about = "Chat with the deskmate intent engine")]
struct Args {
    /// Persona answering in cascading mode
    #[arg(long)]
    persona: Option<PersonaId>,

    /// Matching algorithm (scored or cascading)
    #[arg(long)]
    mode: Option<MatchMode>,

    /// Catalog file replacing the built-in scored catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config overlay name under config/
    #[arg(long, env = "DESKMATE_ENV")]
    env: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Persona(PersonaId),
    Mode(MatchMode),
    Invalid(String),
}

/// Parse a `/` command line. Returns `None` for ordinary queries.
fn parse_command(line: &str) -> Option<Command> {
    let rest = line.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let command = match (name, arg) {
        ("quit", _) | ("exit", _) => Command::Quit,
        ("persona", Some(id)) => match id.parse() {
            Ok(persona) => Command::Persona(persona),
            Err(e) => Command::Invalid(e.to_string()),
        },
        ("mode", Some(mode)) => match mode.parse() {
            Ok(mode) => Command::Mode(mode),
            Err(e) => Command::Invalid(e.to_string()),
        },
        _ => Command::Invalid(format!(
            "Unknown command '{}'. Try /persona <id>, /mode scored|cascading or /quit",
            line
        )),
    };

    Some(command)
}

struct Chat {
    config: ChatConfig,
    router: PersonaRouter,
    session: DialogueSession,
}

impl Chat {
    fn new(config: ChatConfig, registry: ConversationRegistry) -> Self {
        Self {
            config,
            router: PersonaRouter::builtin(),
            session: DialogueSession::new(Arc::new(registry)),
        }
    }

    fn resolve(&self, query: &str) -> Option<QueryMatch> {
        let reply = match self.config.mode {
            MatchMode::Scored => self.session.respond(query),
            MatchMode::Cascading => self.router.detect(query, self.config.persona),
        };

        tracing::debug!(
            mode = ?self.config.mode,
            persona = %self.config.persona,
            matched = reply.is_some(),
            "Query resolved"
        );

        reply
    }

    /// Apply a command; false means stop
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Persona(persona) => {
                self.config.persona = persona;
                println!("Persona: {}", persona.display_name());
            }
            Command::Mode(mode) => {
                self.config.mode = mode;
                self.session.reset();
                println!("Mode: {:?}", mode);
            }
            Command::Invalid(message) => println!("{}", message),
        }
        true
    }

    async fn reply(&self, query: &str) -> anyhow::Result<()> {
        let Some(reply) = self.resolve(query) else {
            println!("{}", self.config.fallback_message);
            return Ok(());
        };

        let typing = self.config.typing_delay_ms(&reply.response_text);
        tokio::time::sleep(Duration::from_millis(typing)).await;
        println!("{}", reply.response_text);

        if let Some(widget) = &reply.widget {
            tokio::time::sleep(Duration::from_millis(self.config.widget_delay_ms)).await;
            let rendered = serde_json::to_string_pretty(widget).context("Failed to render widget")?;
            println!("{}", rendered);
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env = args.env.clone();
    let mut config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    if let Some(persona) = args.persona {
        config.chat.persona = persona;
    }
    if let Some(mode) = args.mode {
        config.chat.mode = mode;
    }
    if let Some(catalog) = &args.catalog {
        config.chat.catalog_path = Some(catalog.display().to_string());
    }

    init_tracing(&config);

    tracing::info!(
        environment = env.as_deref().unwrap_or("default"),
        persona = %config.chat.persona,
        mode = ?config.chat.mode,
        "Starting deskmate v{}",
        env!("CARGO_PKG_VERSION")
    );

    let registry = match &config.chat.catalog_path {
        Some(path) => ConversationRegistry::from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path))?,
        None => cs_manager_conversation(),
    };

    for finding in registry.generic_triggers() {
        tracing::warn!(
            entry_id = %finding.entry_id,
            trigger = %finding.trigger,
            "Generic trigger matches unrelated replies"
        );
    }

    tracing::info!(entries = registry.len(), follow_ups = registry.follow_ups().len(), "Catalog ready");

    let mut chat = Chat::new(config.chat.clone(), registry);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = parse_command(line) {
            if !chat.apply(command) {
                break;
            }
            continue;
        }

        chat.reply(line).await?;
    }

    Ok(())
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("deskmate={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
