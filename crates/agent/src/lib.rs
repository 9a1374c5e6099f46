//! Intent resolution engine
//!
//! Features:
//! - Scored trigger matching over a conversation catalog
//! - Cascading rule chains per persona with an exact-phrase fast path
//! - Persona routing
//! - Follow-up aware dialogue sessions

pub mod catalog;
pub mod dialogue;
pub mod matcher;
pub mod personas;
pub mod registry;
pub mod router;
pub mod rules;
pub mod scored;

pub use catalog::cs_manager_conversation;
pub use dialogue::{DialogueSession, Resolution, Turn};
pub use matcher::{Candidate, Matcher, Ranking};
pub use registry::{ConversationRegistry, GenericTrigger, AFFIRMATIVES};
pub use router::{PersonaMatcher, PersonaRouter};
pub use rules::{Predicate, Rule, RuleChain};
pub use scored::{ScoredTriggerMatcher, TriggerScore};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Catalog error: {0}")]
    Config(String),

    #[error("Persona error: {0}")]
    Persona(String),
}

impl From<deskmate_config::ConfigError> for AgentError {
    fn from(err: deskmate_config::ConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}

impl From<deskmate_core::Error> for AgentError {
    fn from(err: deskmate_core::Error) -> Self {
        AgentError::Persona(err.to_string())
    }
}
