//! Config struct definition.

use super::types::{DisplayOptions, RuleSpec};
use serde::Deserialize;

/// Configuration for the hook.
///
/// Unknown fields are ignored for forward compatibility. Both sections are
/// optional: a missing `rules` list means "no rules".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output options.
    pub display: DisplayOptions,

    /// Rules, checked in declaration order.
    pub rules: Vec<RuleSpec>,
}
