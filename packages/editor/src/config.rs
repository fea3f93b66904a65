//! Editor tuning knobs

use serde::{Deserialize, Serialize};

/// Delay after the last keystroke before an edit becomes an undo step
pub const DEFAULT_QUIESCENCE_MS: u64 = 800;

/// Maximum number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub quiescence_ms: u64,
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quiescence_ms: DEFAULT_QUIESCENCE_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"historyLimit": 5}"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.quiescence_ms, DEFAULT_QUIESCENCE_MS);
    }
}
