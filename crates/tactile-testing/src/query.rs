//! Accessible-name matching for role queries.
use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::QueryResult;

/// How accessible names are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Trim and collapse runs of whitespace before comparing.
    pub normalize_whitespace: bool,
    /// Compare `Exact` and `Contains` text case-insensitively. Patterns carry
    /// their own flags (`(?i)`).
    pub ignore_case: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            ignore_case: true,
        }
    }
}

impl MatchOptions {
    pub fn exact_case() -> Self {
        Self {
            ignore_case: false,
            ..Self::default()
        }
    }

    /// Literal text as a regex; `ignore_case` uses Unicode case folding, the
    /// same rules as a `(?i)` pattern.
    fn literal(&self, want: &str, anchored: bool) -> QueryResult<Regex> {
        let want = if self.normalize_whitespace {
            normalize(want)
        } else {
            want.to_string()
        };
        let escaped = regex::escape(&want);
        let source = if anchored {
            format!(r"\A(?:{escaped})\z")
        } else {
            escaped
        };
        Ok(RegexBuilder::new(&source)
            .case_insensitive(self.ignore_case)
            .build()?)
    }
}

/// Trims and collapses whitespace runs to a single space.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accessible-name filter for a role query.
#[derive(Clone, Debug)]
pub enum TextMatch {
    /// Any name, including none.
    Any,
    Exact(String),
    Contains(String),
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(s: impl Into<String>) -> Self {
        TextMatch::Exact(s.into())
    }

    /// Compiles `pattern`; `(?i)` makes it case-insensitive.
    pub fn pattern(pattern: &str) -> QueryResult<Self> {
        Ok(TextMatch::Pattern(Regex::new(pattern)?))
    }

    /// Compiles this filter under `opts`, once per query.
    pub fn matcher(&self, opts: &MatchOptions) -> QueryResult<NameMatcher> {
        let re = match self {
            TextMatch::Any => None,
            TextMatch::Exact(want) => Some(opts.literal(want, true)?),
            TextMatch::Contains(want) => Some(opts.literal(want, false)?),
            TextMatch::Pattern(re) => Some(re.clone()),
        };
        Ok(NameMatcher {
            re,
            normalize_whitespace: opts.normalize_whitespace,
        })
    }

    pub fn matches(&self, name: Option<&str>, opts: &MatchOptions) -> QueryResult<bool> {
        Ok(self.matcher(opts)?.is_match(name))
    }
}

/// A compiled `TextMatch`.
#[derive(Clone, Debug)]
pub struct NameMatcher {
    re: Option<Regex>,
    normalize_whitespace: bool,
}

impl NameMatcher {
    pub fn is_match(&self, name: Option<&str>) -> bool {
        let Some(re) = &self.re else {
            return true;
        };
        let name = name.unwrap_or("");
        if self.normalize_whitespace {
            re.is_match(&normalize(name))
        } else {
            re.is_match(name)
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Any => f.write_str("(any)"),
            TextMatch::Exact(s) => write!(f, "{s:?}"),
            TextMatch::Contains(s) => write!(f, "containing {s:?}"),
            TextMatch::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(s: &str) -> Self {
        TextMatch::Contains(s.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(s: String) -> Self {
        TextMatch::Contains(s)
    }
}

impl From<Regex> for TextMatch {
    fn from(re: Regex) -> Self {
        TextMatch::Pattern(re)
    }
}
