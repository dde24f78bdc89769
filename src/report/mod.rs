//! Reporting of hook results.
//!
//! The hook never prints directly: it hands notices and the aggregated
//! result to a [`Reporter`]. [`ConsoleReporter`] renders them for a terminal;
//! whether colors are used is decided once, when it is built.

mod terminal;


pub use terminal::ConsoleReporter;

use crate::rules::{AggregatedResult, Rule};

/// Severity of a one-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// Receives everything the hook wants to show the user.
///
/// A reporter only renders; the exit code is decided by the hook.
pub trait Reporter {
    /// A titled one-line notice (e.g. "there is no file to check").
    fn notice(&mut self, level: Level, title: &str, text: &str);

    /// The compiled rules, printed before scanning when requested.
    fn rules_summary(&mut self, rules: &[Rule]);

    /// The grouped matches of a run.
    fn report(&mut self, title: &str, result: &AggregatedResult);
}
