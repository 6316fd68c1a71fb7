use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::state::DEFAULT_HOBBY_CATALOG;

use super::AppCore;

const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AppConfig {
    pub(super) hobby_catalog: Option<Vec<String>>,
    pub(super) toast_duration_ms: Option<u64>,
    // Dev/tests: keep toasts in state until the UI explicitly clears them.
    pub(super) disable_toast_autodismiss: Option<bool>,
}

pub(super) fn load_app_config(data_dir: &str) -> AppConfig {
    let path = Path::new(data_dir).join("rolo_config.json");
    let Ok(bytes) = std::fs::read(&path) else {
        return AppConfig::default();
    };
    serde_json::from_slice::<AppConfig>(&bytes).unwrap_or_default()
}

/// The default `rolo_config.json` payload, for hosts that materialize the
/// file before first launch.
pub(crate) fn default_app_config_json() -> String {
    serde_json::json!({
        "hobby_catalog": DEFAULT_HOBBY_CATALOG,
        "toast_duration_ms": DEFAULT_TOAST_DURATION_MS,
        "disable_toast_autodismiss": false,
    })
    .to_string()
}

impl AppCore {
    pub(super) fn hobby_catalog(&self) -> Vec<String> {
        if let Some(catalog) = &self.config.hobby_catalog {
            if !catalog.is_empty() {
                return catalog.clone();
            }
        }
        DEFAULT_HOBBY_CATALOG
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub(super) fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.config
                .toast_duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    pub(super) fn toast_autodismiss_enabled(&self) -> bool {
        // Used to keep Rust tests deterministic.
        if let Some(disable) = self.config.disable_toast_autodismiss {
            return !disable;
        }
        std::env::var("ROLO_DISABLE_TOAST_AUTODISMISS").ok().as_deref() != Some("1")
    }
}
