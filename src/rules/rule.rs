//! Compiled rules.

use crate::config::RuleSpec;
use crate::error::{PatternField, PrecommitError, Result};

use super::pattern::CompiledPattern;

/// A rule ready to be matched against staged files.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Only files whose path matches are checked; None checks every file.
    pub filter: Option<CompiledPattern>,
    pub message: String,
    pub blocking: bool,
    pub pattern: CompiledPattern,
}

impl Rule {
    /// Compile one rule specification.
    ///
    /// # Returns
    ///
    /// * `Ok(Rule)` - Filter and pattern compiled
    /// * `Err(PrecommitError::InvalidPattern)` - Names the rule's message and the failing field
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        let invalid = |field: PatternField| {
            move |reason: String| PrecommitError::InvalidPattern {
                rule: spec.message.clone(),
                field,
                reason,
            }
        };

        let filter = spec
            .filter
            .as_deref()
            .map(CompiledPattern::compile)
            .transpose()
            .map_err(invalid(PatternField::Filter))?;
        let pattern =
            CompiledPattern::compile(&spec.pattern).map_err(invalid(PatternField::Pattern))?;

        Ok(Self {
            filter,
            message: spec.message.clone(),
            blocking: spec.blocking,
            pattern,
        })
    }

    /// Check whether the rule applies to a file path.
    pub fn applies_to(&self, path: &str) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter.is_match(path))
    }
}

/// Compile every rule, in declaration order.
///
/// Fails on the first invalid rule, so that no partial rule set is ever
/// used for scanning.
pub fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<Rule>> {
    specs.iter().map(Rule::compile).collect()
}
