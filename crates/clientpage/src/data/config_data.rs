//! Session configuration stored in `config.yaml`

use serde::{Deserialize, Serialize};

use super::keybindings_data::KeybindingsConfig;

fn default_threshold() -> f64 {
    1_000_000.0
}

fn default_latency_ms() -> u64 {
    150
}

fn default_latency_jitter_ms() -> u64 {
    100
}

fn default_toast_seconds() -> u64 {
    4
}

/// Configuration stored in config.yaml. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Custom permissions granted to the session user
    pub granted_permissions: Vec<String>,
    /// Closed-won opportunity total at which an account counts as high net worth
    pub high_net_worth_threshold: f64,
    /// Simulated service round-trip latency
    pub latency_ms: u64,
    pub latency_jitter_ms: u64,
    /// How long a notification stays in the status bar
    pub toast_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_record: Option<String>,
    pub keybindings: KeybindingsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            granted_permissions: Vec::new(),
            high_net_worth_threshold: default_threshold(),
            latency_ms: default_latency_ms(),
            latency_jitter_ms: default_latency_jitter_ms(),
            toast_seconds: default_toast_seconds(),
            default_record: None,
            keybindings: KeybindingsConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml(
            "granted_permissions:\n  - High_Net_Worth_Client_Service_Representative\nlatency_ms: 0\n",
        )
        .unwrap();

        assert_eq!(
            config.granted_permissions,
            vec!["High_Net_Worth_Client_Service_Representative".to_string()]
        );
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.high_net_worth_threshold, 1_000_000.0);
        assert_eq!(config.toast_seconds, 4);
        assert_eq!(config.keybindings.record.toggle_edit, vec!["e".to_string()]);
    }
}
