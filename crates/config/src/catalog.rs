//! Conversation catalog files
//!
//! A catalog file holds the entries of a scored conversation catalog and
//! the follow-up offers between them. Format is picked by extension
//! (`.yaml`/`.yml`, `.json`, `.toml`).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use deskmate_core::{ConversationEntry, FollowUp};

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub entries: Vec<ConversationEntry>,
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
}

impl CatalogFile {
    pub fn new(entries: Vec<ConversationEntry>, follow_ups: Vec<FollowUp>) -> Self {
        Self { entries, follow_ups }
    }

    /// Read and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let catalog = Self::from_file(path)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file without validating it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let catalog: Self = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
            _ => {
                return Err(ConfigError::ParseError(format!(
                    "Unsupported catalog format: {}",
                    path.display()
                )))
            }
        };

        tracing::debug!(
            path = %path.display(),
            entries = catalog.entries.len(),
            follow_ups = catalog.follow_ups.len(),
            "Catalog file read"
        );

        Ok(catalog)
    }

    /// Save as YAML
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Check the structural rules a hand-written catalog can break
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = self.problems();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidCatalog(errors.join("; ")))
        }
    }

    fn problems(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.entries.is_empty() {
            errors.push("catalog has no entries".to_string());
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.id.trim().is_empty() {
                errors.push("entry with empty id".to_string());
            } else if !seen.insert(entry.id.as_str()) {
                errors.push(format!("duplicate entry id '{}'", entry.id));
            }

            if entry.triggers.is_empty() {
                errors.push(format!("entry '{}' has no triggers", entry.id));
            }
            if entry.triggers.iter().any(|t| t.trim().is_empty()) {
                errors.push(format!("entry '{}' has a blank trigger", entry.id));
            }
        }

        for follow_up in &self.follow_ups {
            for id in [&follow_up.offered_by, &follow_up.resolves_to] {
                if !seen.contains(id.as_str()) {
                    errors.push(format!("follow-up names unknown entry '{}'", id));
                }
            }
            if follow_up.affirmatives.is_empty() {
                errors.push(format!(
                    "follow-up offered by '{}' has no affirmatives",
                    follow_up.offered_by
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
entries:
  - id: q1-schedule-1on1
    triggers: ["schedule 1-on-1", "coaching session with"]
    canonicalQuery: Schedule a 1-on-1 coaching session with Marcus
    responseText: Would you like me to check both of your calendars?
  - id: q9-sla-performance
    triggers: ["sla performance"]
    responseText: Here's the SLA performance analysis.
    widget:
      widgetType: sla-performance-chart
      widgetPayload:
        overallCompliance: 87.0
        target: 90.0
        categories:
          - name: Critical resolution
            compliance: 72.0
            target: 90.0
            status: failing
followUps:
  - offeredBy: q1-schedule-1on1
    affirmatives: ["yes", "sure"]
    resolvesTo: q9-sla-performance
"#;

    #[test]
    fn test_load_yaml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, YAML).unwrap();

        let catalog = CatalogFile::load(&path).unwrap();
        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.follow_ups.len(), 1);
        assert_eq!(
            catalog.entries[1].widget_type(),
            Some(deskmate_core::WidgetType::SlaPerformanceChart)
        );
        assert_eq!(catalog.entries[1].canonical_query, "");
    }

    #[test]
    fn test_json_catalog_and_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("catalog.yml");
        std::fs::write(&yaml_path, YAML).unwrap();
        let catalog = CatalogFile::load(&yaml_path).unwrap();

        let json_path = dir.path().join("catalog.json");
        std::fs::write(&json_path, serde_json::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(CatalogFile::load(&json_path).unwrap(), catalog);

        let out_path = dir.path().join("out.yaml");
        catalog.to_yaml_file(&out_path).unwrap();
        assert_eq!(CatalogFile::load(&out_path).unwrap(), catalog);
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogFile::load("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ini");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            CatalogFile::load(&path).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_validation_errors() {
        let entry = |id: &str, triggers: &[&str]| ConversationEntry::new(id, triggers, "", "reply");

        assert!(CatalogFile::default().validate().is_err());

        let duplicate = CatalogFile::new(vec![entry("a", &["x"]), entry("a", &["y"])], vec![]);
        let err = duplicate.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate entry id 'a'"));

        let no_triggers = CatalogFile::new(vec![entry("a", &[])], vec![]);
        assert!(no_triggers.validate().is_err());

        let blank = CatalogFile::new(vec![entry("a", &["  "])], vec![]);
        assert!(blank.validate().is_err());

        let dangling = CatalogFile::new(
            vec![entry("a", &["x"])],
            vec![FollowUp::new("a", &["yes"], "missing")],
        );
        let err = dangling.validate().unwrap_err().to_string();
        assert!(err.contains("unknown entry 'missing'"));

        let ok = CatalogFile::new(
            vec![entry("a", &["x"]), entry("b", &["y"])],
            vec![FollowUp::new("a", &["yes"], "b")],
        );
        assert!(ok.validate().is_ok());
    }
}
