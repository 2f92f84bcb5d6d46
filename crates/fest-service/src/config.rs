//! # Campaign Configuration
//!
//! YAML-loadable configuration for a single campaign: its name, end
//! timestamp, and the qualification thresholds. Threshold fields default to
//! the standard drive rules when omitted from the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fest_core::Timestamp;
use fest_state::QualificationPolicy;

use crate::error::ConfigError;
use crate::facts::FixedCampaignWindow;

/// Configuration for one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Human-readable campaign name.
    pub name: String,
    /// When the campaign ends; `None` while unannounced.
    #[serde(default)]
    pub ends_at: Option<Timestamp>,
    /// Minimum eligible pull requests to start (and stay) waiting.
    #[serde(default = "default_min_eligible_prs")]
    pub min_eligible_prs: u32,
    /// Whole days a participant must remain waiting before completion.
    #[serde(default = "default_waiting_period_days")]
    pub waiting_period_days: i64,
}

fn default_min_eligible_prs() -> u32 {
    QualificationPolicy::default().min_eligible_prs
}

fn default_waiting_period_days() -> i64 {
    QualificationPolicy::default().waiting_period_days
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            name: "hacktoberfest".to_string(),
            ends_at: None,
            min_eligible_prs: default_min_eligible_prs(),
            waiting_period_days: default_waiting_period_days(),
        }
    }
}

impl CampaignConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load configuration from a YAML file, or fall back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// The qualification thresholds this campaign runs with.
    pub fn policy(&self) -> QualificationPolicy {
        QualificationPolicy {
            min_eligible_prs: self.min_eligible_prs,
            waiting_period_days: self.waiting_period_days,
        }
    }

    /// The campaign window for the ended-fact query.
    pub fn window(&self) -> FixedCampaignWindow {
        FixedCampaignWindow {
            ends_at: self.ends_at,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_match_policy_defaults() {
        let config = CampaignConfig::default();
        assert_eq!(config.policy(), QualificationPolicy::default());
        assert!(config.ends_at.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CampaignConfig {
            name: "hacktoberfest-2026".to_string(),
            ends_at: Some(Timestamp::parse("2026-11-01T00:00:00Z").unwrap()),
            min_eligible_prs: 5,
            waiting_period_days: 14,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CampaignConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, config.name);
        assert_eq!(parsed.ends_at, config.ends_at);
        assert_eq!(parsed.policy(), config.policy());
    }

    #[test]
    fn test_omitted_thresholds_fall_back_to_defaults() {
        let parsed: CampaignConfig = serde_yaml::from_str("name: drive\n").unwrap();
        assert_eq!(parsed.min_eligible_prs, 4);
        assert_eq!(parsed.waiting_period_days, 7);
        assert!(parsed.ends_at.is_none());
    }
}
