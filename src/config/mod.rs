//! Configuration model for the hook.
//!
//! This module defines the Config struct that represents the hook's rule
//! file (`git-precommit-checks.yaml`, `.yml`, `.json`, or the
//! `"git-precommit-checks"` key of `package.json`). It supports
//! forward-compatible parsing (unknown fields are ignored), documented
//! defaults for optional fields, and validation of config values.
//!
//! A repository without any configuration is valid: it has no rules.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::{CONFIG_FILE_NAMES, DiscoveredConfig, PACKAGE_JSON_KEY};
pub use types::{DisplayOptions, RuleSpec};
