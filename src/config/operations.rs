//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{PrecommitError, Result};
use std::path::{Path, PathBuf};

/// Dedicated config file names, in discovery order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "git-precommit-checks.yaml",
    "git-precommit-checks.yml",
    "git-precommit-checks.json",
];

/// Key holding the config inside `package.json`.
pub const PACKAGE_JSON_KEY: &str = "git-precommit-checks";

/// A configuration together with the file it was read from.
#[derive(Debug, Clone)]
pub struct DiscoveredConfig {
    pub path: PathBuf,
    pub config: Config,
}

impl DiscoveredConfig {
    /// The config path relative to `repo_root`, with forward slashes.
    ///
    /// Returns None when the config lives outside the repository.
    pub fn repo_relative_path(&self, repo_root: &Path) -> Option<String> {
        let rel = self.path.strip_prefix(repo_root).ok()?;
        Some(rel.to_string_lossy().replace('\\', "/"))
    }
}

impl Config {
    /// Load config from a file, choosing the format from its name.
    ///
    /// - `package.json`: the `"git-precommit-checks"` key (absent key = no rules)
    /// - `*.json`: the whole document
    /// - anything else: YAML
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrecommitError::ConfigLoad)` - Read, parse or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrecommitError::ConfigLoad(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if file_name == "package.json" {
            Ok(Self::from_package_json(&content)?.unwrap_or_default())
        } else if file_name.ends_with(".json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Find and load the configuration of the repository at `repo_root`.
    ///
    /// Dedicated config files are tried first, in [`CONFIG_FILE_NAMES`]
    /// order; then the [`PACKAGE_JSON_KEY`] key of `package.json`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(_))` - The first configuration found
    /// * `Ok(None)` - No configuration anywhere (a valid "no rules" state)
    /// * `Err(PrecommitError::ConfigLoad)` - A config file exists but is invalid
    pub fn discover<P: AsRef<Path>>(repo_root: P) -> Result<Option<DiscoveredConfig>> {
        let repo_root = repo_root.as_ref();

        for name in CONFIG_FILE_NAMES {
            let path = repo_root.join(name);
            if path.is_file() {
                let config = Self::load(&path)?;
                return Ok(Some(DiscoveredConfig { path, config }));
            }
        }

        let package_json = repo_root.join("package.json");
        if package_json.is_file() {
            let content = std::fs::read_to_string(&package_json).map_err(|e| {
                PrecommitError::ConfigLoad(format!(
                    "failed to read '{}': {}",
                    package_json.display(),
                    e
                ))
            })?;
            if let Some(config) = Self::from_package_json(&content)? {
                return Ok(Some(DiscoveredConfig {
                    path: package_json,
                    config,
                }));
            }
        }

        Ok(None)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default (rule-less) config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrecommitError::ConfigLoad(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| PrecommitError::ConfigLoad(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Extract the config from a `package.json` document.
    ///
    /// Returns `Ok(None)` when the document has no [`PACKAGE_JSON_KEY`] key.
    pub fn from_package_json(json: &str) -> Result<Option<Self>> {
        let document: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            PrecommitError::ConfigLoad(format!("failed to parse package.json: {}", e))
        })?;

        let Some(section) = document.get(PACKAGE_JSON_KEY) else {
            return Ok(None);
        };

        let config: Config = serde_json::from_value(section.clone()).map_err(|e| {
            PrecommitError::ConfigLoad(format!(
                "failed to parse \"{}\" in package.json: {}",
                PACKAGE_JSON_KEY, e
            ))
        })?;

        config.validate()?;
        Ok(Some(config))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - every rule has a non-blank `message`
    /// - every rule has a non-empty `pattern`
    /// - a `filter`, when present, is non-empty
    ///
    /// Regex syntax is checked when the rules are compiled.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            let position = index + 1;

            if rule.message.trim().is_empty() {
                return Err(PrecommitError::ConfigLoad(format!(
                    "config validation failed: rule #{} has an empty message",
                    position
                )));
            }

            if rule.pattern.is_empty() {
                return Err(PrecommitError::ConfigLoad(format!(
                    "config validation failed: rule #{} (\"{}\") has an empty pattern",
                    position, rule.message
                )));
            }

            if rule.filter.as_deref() == Some("") {
                return Err(PrecommitError::ConfigLoad(format!(
                    "config validation failed: rule #{} (\"{}\") has an empty filter. Remove the key to check every file.",
                    position, rule.message
                )));
            }
        }

        Ok(())
    }

    /// Returns true when no rule is configured.
    pub fn has_no_rules(&self) -> bool {
        self.rules.is_empty()
    }
}
