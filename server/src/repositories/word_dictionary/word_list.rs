use crate::repositories::{InMemoryWordDictionary, WordDictionary};
use anyhow::Context;
use config::Config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Default)]
pub struct DictionaryConfig {
    pub path: Option<PathBuf>,
}

impl DictionaryConfig {
    const CONFIG_PREFIX: &'static str = "DICTIONARY";

    pub fn load_from_env() -> anyhow::Result<Self> {
        Config::builder()
            .add_source(config::Environment::with_prefix(Self::CONFIG_PREFIX).separator("__"))
            .build()?
            .try_deserialize::<DictionaryConfig>()
            .map_err(|e| anyhow::anyhow!("failed to load Dictionary Configuration: {}", e))
    }
}

/// Dictionary backed by a plain word list, one word per line
/// (e.g. `/usr/share/dict/words`).
pub struct WordListDictionary {
    words: InMemoryWordDictionary,
}

impl WordListDictionary {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;

        let words = InMemoryWordDictionary::from_words(contents.lines());
        info!(path = %path.display(), words = words.len(), "word list loaded");

        Ok(Self { words })
    }

    /// Returns `None` when no word list is configured.
    pub async fn load_from_env() -> anyhow::Result<Option<Self>> {
        let config = DictionaryConfig::load_from_env()?;

        match config.path {
            Some(path) => Ok(Some(Self::load(&path).await?)),
            None => Ok(None),
        }
    }
}

impl WordDictionary for WordListDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
