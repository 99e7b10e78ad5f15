//! Field validators and input normalizers for request DTOs.
//!
//! The `validate_*` functions plug into `#[validate(custom(function = ...))]`
//! on `validator::Validate` derives. The `trimmed*` functions plug into
//! `#[serde(deserialize_with = ...)]` so that validation always sees
//! whitespace-trimmed input.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use validator::{ValidateUrl, ValidationError};

use crate::catalog::{Difficulty, ResourceType};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a single responsibility line.
pub const MAX_RESPONSIBILITY_LEN: usize = 500;

/// Maximum length of a single skill.
pub const MAX_SKILL_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Normalizers
// ---------------------------------------------------------------------------

/// Deserialize a string and trim surrounding whitespace.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Deserialize a list of strings, trimming every item. Order is preserved.
pub fn trimmed_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|s| s.trim().to_string()).collect())
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

fn error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Reject NUL characters, which PostgreSQL `TEXT` cannot store.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if contains_nul(value) {
        return Err(error(
            "nul_character",
            "must not contain NUL characters".to_string(),
        ));
    }
    Ok(())
}

/// Whether `value` holds a NUL character.
pub fn contains_nul(value: &str) -> bool {
    value.contains('\0')
}

/// Validate that a URL is absolute and uses `http` or `https`.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    validate_text(value)?;
    let lower = value.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(error(
            "url_scheme",
            "url must start with http:// or https://".to_string(),
        ));
    }
    if !value.validate_url() {
        return Err(error("url", format!("'{value}' is not a valid URL")));
    }
    Ok(())
}

/// Validate a resource type against the fixed catalog.
pub fn validate_resource_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<ResourceType>()
        .map(|_| ())
        .map_err(|e| error("resource_type", e.to_string()))
}

/// Validate a difficulty level against the fixed catalog.
pub fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Difficulty>()
        .map(|_| ())
        .map_err(|e| error("difficulty", e.to_string()))
}

/// Validate the items of a role's responsibility list.
pub fn validate_responsibilities(items: &[String]) -> Result<(), ValidationError> {
    validate_items(items, MAX_RESPONSIBILITY_LEN, "responsibility")
}

/// Validate the items of a role's skill list.
pub fn validate_skills(items: &[String]) -> Result<(), ValidationError> {
    validate_items(items, MAX_SKILL_LEN, "skill")
}

/// Each item must be non-blank, at most `max_len` characters, and unique
/// ignoring case.
fn validate_items(items: &[String], max_len: usize, label: &str) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let position = index + 1;
        let len = item.chars().count();
        if len == 0 {
            return Err(error(
                "blank_item",
                format!("{label} #{position} must not be blank"),
            ));
        }
        if contains_nul(item) {
            return Err(error(
                "nul_character",
                format!("{label} #{position} must not contain NUL characters"),
            ));
        }
        if len > max_len {
            return Err(error(
                "item_too_long",
                format!("{label} #{position} exceeds {max_len} characters"),
            ));
        }
        if !seen.insert(item.to_lowercase()) {
            return Err(error(
                "duplicate_item",
                format!("{label} '{item}' is listed more than once"),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
