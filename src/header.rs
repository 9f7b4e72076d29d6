//! Field-name validation for sample headers.
//!
//! Runs before any data row is consumed, so a bad header can never produce
//! partial output.

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::error::SchemaError;

static FIELD_NAME: OnceLock<Regex> = OnceLock::new();

fn field_name_pattern() -> &'static Regex {
    FIELD_NAME
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("field-name pattern compiles"))
}

/// True when `token` is a legal field name: letters, digits, and
/// underscores only, not starting with a digit.
pub fn is_legal_field_name(token: &str) -> bool {
    field_name_pattern().is_match(token)
}

/// Validates a full header row.
///
/// Fails on the first token violating the field-name rule, then on the
/// first name that appears more than once.
pub fn validate_headers(tokens: &[String]) -> Result<(), SchemaError> {
    if let Some(bad) = tokens.iter().find(|token| !is_legal_field_name(token)) {
        return Err(SchemaError::InvalidHeader { token: bad.clone() });
    }
    if let Some(dup) = tokens.iter().duplicates().next() {
        return Err(SchemaError::DuplicateHeader { token: dup.clone() });
    }
    Ok(())
}
