use crate::error::StopwatchError;
use crate::util::clog;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "stopwatch_config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwatchConfig {
    pub tick_interval_ms: u32,
    pub start_label: String,
    pub stop_label: String,
    /// `KeyboardEvent.code` that toggles the stopwatch.
    pub toggle_key: String,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            start_label: "Start".to_string(),
            stop_label: "Stop".to_string(),
            toggle_key: "Space".to_string(),
        }
    }
}

impl StopwatchConfig {
    pub fn from_json(raw: &str) -> Result<Self, StopwatchError> {
        let mut cfg: Self = serde_json::from_str(raw)?;
        cfg.tick_interval_ms = cfg.tick_interval_ms.max(1);
        Ok(cfg)
    }

    /// Defaults, overridden by `localStorage["stopwatch_config"]` when present and valid.
    pub fn load() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let raw = match win.local_storage() {
            Ok(Some(store)) => store.get_item(STORAGE_KEY).ok().flatten(),
            _ => None,
        };
        match raw {
            None => Self::default(),
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => {
                    clog(&format!("config override loaded: {:?}", cfg));
                    cfg
                }
                Err(e) => {
                    clog(&format!("config override rejected: {}", e));
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = StopwatchConfig::from_json(r#"{"stop_label":"Halt"}"#).unwrap();
        assert_eq!(cfg.stop_label, "Halt");
        assert_eq!(cfg.start_label, "Start");
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert_eq!(cfg.toggle_key, "Space");
    }

    #[test]
    fn zero_interval_is_clamped() {
        let cfg = StopwatchConfig::from_json(r#"{"tick_interval_ms":0}"#).unwrap();
        assert_eq!(cfg.tick_interval_ms, 1);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = StopwatchConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, StopwatchError::Config(_)));
        assert!(err.to_string().starts_with("invalid stopwatch config"));
    }
}
