//! Rule compilation and matching.
//!
//! - [`CompiledPattern`] turns a textual regex (`body` or `/body/flags`) into a matcher
//! - [`Rule`] is a compiled [`RuleSpec`](crate::config::RuleSpec)
//! - [`match_rule`] applies one rule to every staged file
//! - [`aggregate`] runs every rule and groups matches into blocking and warning groups
//!
//! Error handling:
//! - Invalid patterns are data errors reported before any diff is read, never
//!   per-file failures

mod aggregate;
mod matcher;
mod pattern;
mod rule;


// Re-export public API
pub use aggregate::{AggregatedResult, MatchGroup, aggregate};
pub use matcher::{MatchEntry, RuleMatches, match_rule};
pub use pattern::CompiledPattern;
pub use rule::{Rule, compile_rules};
