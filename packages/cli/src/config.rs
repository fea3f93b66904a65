use anyhow::Context as _;
use jovibe_caret::MonospaceSurface;
use jovibe_editor::EditorConfig;
use jovibe_lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "jovibe.config.json";

/// Jovibe configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    /// Lexicon JSON replacing the built-in vocabulary, relative to the
    /// config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<String>,

    /// Metrics used by `jovibe caret`
    #[serde(default)]
    pub surface: MonospaceSurface,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// The configured lexicon, or the built-in one
    pub fn load_lexicon(&self, cwd: &str) -> anyhow::Result<Lexicon> {
        match &self.lexicon {
            Some(path) => {
                let path = Path::new(cwd).join(path);
                Lexicon::load(&path).with_context(|| format!("Cannot load lexicon {}", path.display()))
            }
            None => Ok(Lexicon::builtin()),
        }
    }
}
