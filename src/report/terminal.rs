//! Terminal reporter.

use console::Style;
use std::io::{self, Write};

use super::{Level, Reporter};
use crate::config::DisplayOptions;
use crate::rules::{AggregatedResult, MatchGroup, Rule};

/// Renders notices and match groups as plain or colored text.
///
/// ```text
/// ✖  contents checks: oops, something's wrong!
/// === You've got leftover conflict markers ===
/// src/lib.rs:12
///     <<<<<<< HEAD
/// ```
pub struct ConsoleReporter<W: Write> {
    out: W,
    display: DisplayOptions,
    colors: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on stdout.
    ///
    /// Colors are used when stdout supports them (tty, `CLICOLOR`), `NO_COLOR`
    /// is unset and `no_color` is false.
    pub fn stdout(display: DisplayOptions, no_color: bool) -> Self {
        let colors =
            !no_color && std::env::var_os("NO_COLOR").is_none() && console::colors_enabled();
        Self::new(io::stdout(), display, colors)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, display: DisplayOptions, colors: bool) -> Self {
        Self {
            out,
            display,
            colors,
        }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.colors {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    // Output errors are ignored: failing to print must not change the verdict.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn groups(&mut self, groups: &[MatchGroup], level: Level) {
        let color = level_style(level);
        for group in groups {
            let header = format!("=== {} ===", group.message);
            let header = self.paint(&header, &color);
            self.line(&header);

            for entry in &group.entries {
                let location = self.paint(&entry.to_string(), &color);
                self.line(&location);
                if self.display.offending_content {
                    let text = self.paint(&format!("    {}", entry.matched_text), &Style::new().dim());
                    self.line(&text);
                }
            }
            self.line("");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn notice(&mut self, level: Level, title: &str, text: &str) {
        let icon = match level {
            Level::Success => "✔",
            Level::Warning => "❗",
            Level::Error => "✖",
        };
        let heading = self.paint(&format!("{}  {}", icon, title), &level_style(level));
        self.line(&format!("{}: {}", heading, text));
    }

    fn rules_summary(&mut self, rules: &[Rule]) {
        let heading = self.paint(&format!("{} rule(s) loaded:", rules.len()), &Style::new().bold());
        self.line(&heading);

        for rule in rules {
            let (icon, level) = if rule.blocking {
                ("✖", Level::Error)
            } else {
                ("❗", Level::Warning)
            };
            let icon = self.paint(icon, &level_style(level));
            let filter = rule
                .filter
                .as_ref()
                .map_or_else(|| "all files".to_string(), |f| f.to_string());
            self.line(&format!("  {} {}", icon, rule.message));
            self.line(&format!("      pattern: {}", rule.pattern));
            self.line(&format!("      filter:  {}", filter));
        }
        self.line("");
    }

    fn report(&mut self, title: &str, result: &AggregatedResult) {
        if !result.warnings.is_empty() {
            self.notice(
                Level::Warning,
                title,
                "there may be something to improve or fix!",
            );
            self.groups(&result.warnings, Level::Warning);
        }

        if !result.blocking.is_empty() {
            self.notice(Level::Error, title, "oops, something’s wrong!  😱");
            self.groups(&result.blocking, Level::Error);
        }

        if self.display.short_stats {
            let stats = format!(
                "{} error(s), {} warning(s)",
                result.error_count(),
                result.warning_count()
            );
            let stats = self.paint(&stats, &Style::new().bold());
            self.line(&stats);
        }
    }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::Success => Style::new().green(),
        Level::Warning => Style::new().yellow(),
        Level::Error => Style::new().red(),
    }
}
