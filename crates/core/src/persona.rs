//! Persona identifiers
//!
//! A persona decides which cascading rule chain inspects a query. The scored
//! trigger matcher ignores it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The closed set of demo personas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    /// Executive view: summaries, SLA, account risk
    CLevel,
    /// Team lead view: workload, performance, coaching
    #[default]
    CsManager,
    /// Front-line view: tickets, drafts, knowledge base
    SupportAgent,
}

impl PersonaId {
    pub const ALL: [PersonaId; 3] = [
        PersonaId::CLevel,
        PersonaId::CsManager,
        PersonaId::SupportAgent,
    ];

    /// Wire identifier (`c-level`, `cs-manager`, `support-agent`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::CLevel => "c-level",
            PersonaId::CsManager => "cs-manager",
            PersonaId::SupportAgent => "support-agent",
        }
    }

    /// Human-readable label for prompts and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaId::CLevel => "Executive",
            PersonaId::CsManager => "CS Manager",
            PersonaId::SupportAgent => "Support Agent",
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::ALL
            .into_iter()
            .find(|persona| persona.as_str() == s)
            .ok_or_else(|| Error::UnknownPersona(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_personas() {
        assert_eq!("c-level".parse::<PersonaId>().unwrap(), PersonaId::CLevel);
        assert_eq!("cs-manager".parse::<PersonaId>().unwrap(), PersonaId::CsManager);
        assert_eq!(
            "support-agent".parse::<PersonaId>().unwrap(),
            PersonaId::SupportAgent
        );
    }

    #[test]
    fn test_default_is_cs_manager() {
        assert_eq!(PersonaId::default(), PersonaId::CsManager);
    }

    #[test]
    fn test_parse_unknown_persona() {
        let err = "cto".parse::<PersonaId>().unwrap_err();
        assert_eq!(err, Error::UnknownPersona("cto".to_string()));
        // Ids are exact; no case folding
        assert!("C-Level".parse::<PersonaId>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for persona in PersonaId::ALL {
            let json = serde_json::to_string(&persona).unwrap();
            assert_eq!(json, format!("\"{}\"", persona.as_str()));
        }
    }
}
