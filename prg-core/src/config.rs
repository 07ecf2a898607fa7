use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Test-only knobs. Both must stay unset in production configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestOverrides {
    /// Fixed bet in wei, bypassing the computed balance split.
    pub bet_amount: Option<u128>,
    /// Fixed balance in wei, bypassing the coordinator lookup.
    pub token_balance: Option<u128>,
}

/// PRG game configuration, resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub enabled: bool,
    pub coordinator_url: Option<String>,
    pub org_id: Option<String>,
    /// Directory holding per-peer state and record files.
    pub log_dir: PathBuf,
    #[serde(default)]
    pub overrides: TestOverrides,
}

/// Coordinator connection details present only when the game is playable.
#[derive(Debug, Clone)]
pub struct CoordinatorEndpoint {
    pub url: String,
    pub org_id: String,
}

impl GameConfig {
    /// Returns the coordinator endpoint if the game is enabled and fully
    /// configured, `None` otherwise. A missing URL or org id disables the
    /// game rather than erroring.
    pub fn resolve(&self) -> Option<CoordinatorEndpoint> {
        if !self.enabled {
            return None;
        }
        match (self.coordinator_url.as_deref(), self.org_id.as_deref()) {
            (Some(url), Some(org_id)) if !url.is_empty() && !org_id.is_empty() => {
                Some(CoordinatorEndpoint {
                    url: url.to_string(),
                    org_id: org_id.to_string(),
                })
            }
            _ => {
                tracing::debug!("PRG game disabled due to missing configuration");
                None
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            coordinator_url: None,
            org_id: None,
            log_dir: PathBuf::from("."),
            overrides: TestOverrides::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> GameConfig {
        GameConfig {
            enabled: true,
            coordinator_url: Some("http://localhost:9000".to_string()),
            org_id: Some("org-1".to_string()),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_resolve_full_config() {
        let endpoint = enabled_config().resolve().unwrap();
        assert_eq!(endpoint.url, "http://localhost:9000");
        assert_eq!(endpoint.org_id, "org-1");
    }

    #[test]
    fn test_missing_org_disables() {
        let mut config = enabled_config();
        config.org_id = None;
        assert!(config.resolve().is_none());
    }

    #[test]
    fn test_empty_url_disables() {
        let mut config = enabled_config();
        config.coordinator_url = Some(String::new());
        assert!(config.resolve().is_none());
    }

    #[test]
    fn test_disabled_flag_wins() {
        let mut config = enabled_config();
        config.enabled = false;
        assert!(config.resolve().is_none());
    }
}
