use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::linkage::Linkage;
use crate::text::TokenizerOptions;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "bough.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub words: WordsConfig,
    #[serde(default)]
    pub cluster: ClusterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsConfig {
    /// How many words to print when the command line gives no count.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Requests below this are raised to it.
    #[serde(default = "default_top_n")]
    pub min_top_n: usize,
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Stopword file, one word per line. Relative paths resolve against the
    /// directory holding the config file.
    #[serde(default)]
    pub stopwords: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub require_markers: bool,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_top_n: default_top_n(),
            min_word_len: default_min_word_len(),
            stopwords: None,
            require_markers: default_true(),
        }
    }
}

impl WordsConfig {
    /// Tokenizer settings derived from this section.
    #[must_use]
    pub const fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            min_word_len: self.min_word_len,
            require_markers: self.require_markers,
        }
    }

    /// Effective count for a requested `n` (or the default when absent).
    #[must_use]
    pub fn effective_top_n(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.top_n).max(self.min_top_n)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// `"single"` or `"complete"`; anything else fails the load.
    #[serde(default)]
    pub linkage: Linkage,
}

/// Parse a config file, resolving relative stopword paths against its
/// directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let (Some(stopwords), Some(dir)) = (config.words.stopwords.as_mut(), path.parent()) {
        if stopwords.is_relative() {
            *stopwords = dir.join(&*stopwords);
        }
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Locate the config that applies to `project_root`.
///
/// Precedence: `explicit`, then `<project_root>/bough.toml`, then
/// `<config dir>/bough/config.toml`. `None` means built-in defaults.
#[must_use]
pub fn discover_config(project_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.exists() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("bough/config.toml");
    user.exists().then_some(user)
}

/// Load the effective configuration.
///
/// # Errors
///
/// Returns an error if a discovered config file cannot be read or parsed.
/// An explicit path that does not exist is also an error.
pub fn resolve_config(project_root: &Path, explicit: Option<&Path>) -> Result<Config> {
    match discover_config(project_root, explicit) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

const fn default_true() -> bool {
    true
}

const fn default_top_n() -> usize {
    10
}

const fn default_min_word_len() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.words.top_n, 10);
        assert_eq!(cfg.words.min_top_n, 10);
        assert_eq!(cfg.words.min_word_len, 2);
        assert!(cfg.words.require_markers);
        assert!(cfg.words.stopwords.is_none());
        assert_eq!(cfg.cluster.linkage, Linkage::Single);
    }

    #[test]
    fn effective_top_n_applies_floor() {
        let words = WordsConfig::default();
        assert_eq!(words.effective_top_n(None), 10);
        assert_eq!(words.effective_top_n(Some(3)), 10);
        assert_eq!(words.effective_top_n(Some(25)), 25);
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = resolve_config(dir.path(), None).expect("load should succeed");
        assert_eq!(cfg.words.top_n, 10);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[words]\ntop_n = 25\nstopwords = \"lists/stop.txt\"\n",
        )
        .expect("write config");

        let cfg = resolve_config(dir.path(), None).expect("parse");
        assert_eq!(cfg.words.top_n, 25);
        assert_eq!(cfg.words.min_word_len, 2);
        assert_eq!(cfg.cluster.linkage, Linkage::Single);
        assert_eq!(
            cfg.words.stopwords.as_deref(),
            Some(dir.path().join("lists/stop.txt").as_path())
        );
    }

    #[test]
    fn absolute_stopword_path_is_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[words]\nstopwords = \"/etc/stopwords\"\n").expect("write");
        let cfg = resolve_config(dir.path(), Some(&path)).expect("parse");
        assert_eq!(
            cfg.words.stopwords.as_deref(),
            Some(Path::new("/etc/stopwords"))
        );
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[words\n").expect("write");
        let err = resolve_config(dir.path(), None).expect_err("invalid toml");
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn linkage_is_read_from_cluster_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[cluster]\nlinkage = \"complete\"\n",
        )
        .expect("write config");
        let cfg = resolve_config(dir.path(), None).expect("parse");
        assert_eq!(cfg.cluster.linkage, Linkage::Complete);
    }

    #[test]
    fn unknown_linkage_fails_the_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[cluster]\nlinkage = \"ward\"\n",
        )
        .expect("write config");
        let err = resolve_config(dir.path(), None).expect_err("ward is not a linkage");
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        assert!(resolve_config(dir.path(), Some(&missing)).is_err());
    }
}
