//! Field readers with explicit defaults.
//!
//! Individual entries are never rejected. A missing required string becomes
//! `""` and a missing or unparsable number becomes zero; both are logged at
//! debug level so a malformed document can be diagnosed without failing it.

use std::str::FromStr;
use tilescope_api::models::raw::{RawNode, texts, to_sequence};

pub(crate) fn required_text(node: &RawNode, key: &str, entity: &str) -> String {
    match node.child_text(key) {
        Some(value) => value.to_string(),
        None => {
            tracing::debug!("{} is missing {}; defaulting to empty", entity, key);
            String::new()
        }
    }
}

pub(crate) fn optional_text(node: &RawNode, key: &str) -> Option<String> {
    node.child_string(key)
}

pub(crate) fn number<T>(node: &RawNode, key: &str, entity: &str) -> T
where
    T: FromStr + Default,
{
    let raw = node.child_text(key);
    match raw.map(str::trim).map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::debug!(
                "{} has unparsable {} {:?}; defaulting to zero",
                entity,
                key,
                raw.unwrap_or_default()
            );
            T::default()
        }
        None => {
            tracing::debug!("{} is missing {}; defaulting to zero", entity, key);
            T::default()
        }
    }
}

pub(crate) fn flag(node: &RawNode, key: &str) -> bool {
    node.child_text(key)
        .map(str::trim)
        .is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1")
}

/// Every `Keywords/Keyword` value, across repeated `Keywords` blocks.
pub(crate) fn keywords(node: &RawNode) -> Vec<String> {
    to_sequence(node.get("Keywords"))
        .into_iter()
        .flat_map(|block| texts(block, "Keyword"))
        .collect()
}

/// Text values of a repeatable element such as `Format`.
pub(crate) fn list(node: &RawNode, key: &str) -> Vec<String> {
    texts(node, key)
}
