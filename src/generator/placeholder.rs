//! Parse-once templates with `{{UPPER_CASE}}` placeholders.
//!
//! A template is split into literal and placeholder segments when it is
//! created. Rendering walks the segments and looks each placeholder up in a
//! [`TokenTable`]; values are inserted in a single pass and never re-scanned.
//!
//! ## Escaping
//!
//! Substituted values are inserted verbatim except for the open delimiter: a
//! `{` that would directly follow another `{` in the output is written as the
//! escape `\u007b`. Built-in templates only place user text inside JSON or
//! TypeScript string literals, where that escape decodes back to `{`, so the
//! rendered files never contain `{{` while the user's text survives intact.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::error::GenerateError;

/// Opening delimiter of a placeholder
pub const OPEN_DELIMITER: &str = "{{";

/// Replacement for a `{` that would extend a preceding `{` into a delimiter
pub const BRACE_ESCAPE: &str = "\\u007b";

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("placeholder regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Token name → substituted value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable(BTreeMap<&'static str, String>);

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &'static str, value: impl Into<String>) {
        self.0.insert(token, value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        for caps in PLACEHOLDER_REGEX.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(name.as_str().to_string()));
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Literal(source[last..].to_string()));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the template has no text at all
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Placeholder names in order of appearance, repeats included
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder for the file at `file`.
    ///
    /// Fails on a placeholder missing from `tokens`, and on an opening
    /// delimiter left in template text (a malformed placeholder such as
    /// `{{ name }}`).
    pub fn render(&self, file: &str, tokens: &TokenTable) -> Result<String, GenerateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    if let Some(pos) = text.find(OPEN_DELIMITER) {
                        return Err(GenerateError::UnresolvedPlaceholder {
                            file: file.to_string(),
                            token: stray_token(&text[pos..]),
                        });
                    }
                    out.push_str(text);
                }
                Segment::Placeholder(name) => match tokens.get(name) {
                    Some(value) => push_escaped(&mut out, value),
                    None => {
                        return Err(GenerateError::UnresolvedPlaceholder {
                            file: file.to_string(),
                            token: name.clone(),
                        })
                    }
                },
            }
        }
        // A literal starting with `{` right after a value ending in `{`
        if let Some(pos) = out.find(OPEN_DELIMITER) {
            return Err(GenerateError::UnresolvedPlaceholder {
                file: file.to_string(),
                token: stray_token(&out[pos..]),
            });
        }
        Ok(out)
    }
}

/// Append `value`, escaping every `{` that would follow another `{`
fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        if c == '{' && out.ends_with('{') {
            out.push_str(BRACE_ESCAPE);
        } else {
            out.push(c);
        }
    }
}

/// The text of a stray placeholder, up to its closing delimiter or end of line
fn stray_token(text: &str) -> String {
    let end = text
        .find("}}")
        .map(|i| i + 2)
        .or_else(|| text.find('\n'))
        .unwrap_or(text.len());
    text[..end].to_string()
}
