//! Built-in rule chains, one per persona
//!
//! Rule order inside each chain is significant. Where two rules overlap,
//! the narrower one is declared first.

mod c_level;
mod cs_manager;
mod support_agent;

pub use c_level::c_level;
pub use cs_manager::cs_manager;
pub use support_agent::support_agent;

use deskmate_core::PersonaId;

use crate::rules::RuleChain;

/// Built-in chain for a persona
pub fn chain_for(persona: PersonaId) -> RuleChain {
    match persona {
        PersonaId::CLevel => c_level(),
        PersonaId::CsManager => cs_manager(),
        PersonaId::SupportAgent => support_agent(),
    }
}
