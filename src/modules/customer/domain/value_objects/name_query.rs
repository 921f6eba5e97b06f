//! Free-text customer name query, normalized into first/last name fragments
//!
//! Known limitations, kept deliberately:
//! - only the first character of each fragment is upper-cased, matching is
//!   otherwise case-sensitive
//! - `%` and `_` inside a fragment are not escaped and act as LIKE wildcards
//! - tokens after the second are dropped (two-field name model)

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Normalized search pattern produced from a raw query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameQuery {
    /// One token: matches first name OR last name
    Single(String),
    /// Two or more tokens: first token against first name AND second against last name
    Full { first: String, last: String },
}

impl NameQuery {
    /// Split `raw` on whitespace and capitalize each kept fragment.
    ///
    /// Empty or all-whitespace input is rejected rather than matching everyone.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Validator::validate_search_query(raw)?;

        let mut tokens = raw.split_whitespace();
        let first = tokens
            .next()
            .map(capitalize_first)
            .ok_or_else(|| AppError::InvalidInput("Search query cannot be empty".to_string()))?;

        match tokens.next() {
            None => Ok(NameQuery::Single(first)),
            Some(last) => Ok(NameQuery::Full {
                first,
                last: capitalize_first(last),
            }),
        }
    }

    /// `%fragment%` patterns in positional order (`$1`, `$2`)
    pub fn like_patterns(&self) -> Vec<String> {
        match self {
            NameQuery::Single(fragment) => vec![like_pattern(fragment)],
            NameQuery::Full { first, last } => vec![like_pattern(first), like_pattern(last)],
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            NameQuery::Single(_) => "one-word",
            NameQuery::Full { .. } => "two-word",
        }
    }
}

/// Upper-case the leading character, leave the rest untouched
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn like_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}
