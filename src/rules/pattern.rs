//! Pattern compilation from the two textual forms.

use regex::{Regex, RegexBuilder};

/// A compiled filter or line pattern.
///
/// Keeps the source text for summaries and debug output.
#[derive(Clone)]
pub struct CompiledPattern {
    regex: Regex,
    source: String,
}

impl std::fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.source).finish()
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl CompiledPattern {
    /// Compile a pattern written either bare (`(?:FIXME|TODO)`) or
    /// delimited with flags (`/^[<>|=]{4,}/m`).
    ///
    /// Supported flags:
    /// - `i` case-insensitive
    /// - `m` multi-line (`^`/`$` match at line boundaries)
    /// - `s` `.` matches newlines
    /// - `x` ignore whitespace and allow `#` comments
    /// - `U` swap greediness
    /// - `g`, `u`, `y` accepted and ignored
    ///
    /// Returns the regex error text on failure; callers attach the rule context.
    pub fn compile(text: &str) -> Result<Self, String> {
        let (body, flags) = split_delimited(text).unwrap_or((text, ""));

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                'U' => {
                    builder.swap_greed(true);
                }
                // Global, unicode and sticky have no meaning for a single is_match test.
                'g' | 'u' | 'y' => {}
                other => {
                    return Err(format!("unsupported regex flag '{}' in '{}'", other, text));
                }
            }
        }

        let regex = builder.build().map_err(|e| e.to_string())?;

        Ok(Self {
            regex,
            source: text.to_string(),
        })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

/// Split `/body/flags` into its parts; the last slash ends the body.
///
/// Returns None for bare patterns.
fn split_delimited(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Formats as the pattern exactly as written in the configuration.
impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
