//! Persona router
//!
//! Selects the rule chain for the active persona. Persona strings coming
//! from outside (CLI flags, chat commands) go through [`PersonaId`] parsing;
//! an unknown persona yields no match rather than an error.

use std::sync::Arc;

use deskmate_core::{PersonaId, QueryMatch};

use crate::matcher::Matcher;
use crate::personas;
use crate::rules::RuleChain;
use crate::AgentError;

#[derive(Debug, Clone)]
pub struct PersonaRouter {
    c_level: Arc<RuleChain>,
    cs_manager: Arc<RuleChain>,
    support_agent: Arc<RuleChain>,
}

impl PersonaRouter {
    pub fn new(c_level: RuleChain, cs_manager: RuleChain, support_agent: RuleChain) -> Self {
        Self {
            c_level: Arc::new(c_level),
            cs_manager: Arc::new(cs_manager),
            support_agent: Arc::new(support_agent),
        }
    }

    /// Router over the built-in persona chains
    pub fn builtin() -> Self {
        Self::new(
            personas::c_level(),
            personas::cs_manager(),
            personas::support_agent(),
        )
    }

    pub fn route(&self, persona: PersonaId) -> &RuleChain {
        match persona {
            PersonaId::CLevel => &self.c_level,
            PersonaId::CsManager => &self.cs_manager,
            PersonaId::SupportAgent => &self.support_agent,
        }
    }

    pub fn detect(&self, query: &str, persona: PersonaId) -> Option<QueryMatch> {
        self.route(persona).detect(query)
    }

    /// Like [`detect`](Self::detect) for an unparsed persona string
    pub fn detect_raw(&self, query: &str, persona: &str) -> Option<QueryMatch> {
        match persona.parse::<PersonaId>() {
            Ok(persona) => self.detect(query, persona),
            Err(e) => {
                tracing::debug!(error = %e, "No chain for persona");
                None
            }
        }
    }

    pub fn bind(self: &Arc<Self>, persona: PersonaId) -> PersonaMatcher {
        PersonaMatcher {
            router: Arc::clone(self),
            persona,
        }
    }

    pub fn bind_raw(self: &Arc<Self>, persona: &str) -> Result<PersonaMatcher, AgentError> {
        let persona: PersonaId = persona.parse()?;
        Ok(self.bind(persona))
    }
}

impl Default for PersonaRouter {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A router fixed to one persona
#[derive(Debug, Clone)]
pub struct PersonaMatcher {
    router: Arc<PersonaRouter>,
    persona: PersonaId,
}

impl PersonaMatcher {
    pub fn persona(&self) -> PersonaId {
        self.persona
    }
}

impl Matcher for PersonaMatcher {
    fn name(&self) -> &str {
        self.persona.as_str()
    }

    fn find(&self, query: &str) -> Option<QueryMatch> {
        self.router.detect(query, self.persona)
    }
}
