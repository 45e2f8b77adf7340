//! Untyped capabilities tree.
//!
//! `RawNode` is the intermediate shape produced by XML normalization: elements
//! become mappings, text-only elements become leaves, and elements that repeat
//! under the same parent collapse into a sequence. An element that happens to
//! occur once is *not* wrapped in a sequence, so every reader of a repeatable
//! element goes through [`to_sequence`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key under which mixed content (text next to attributes or children) is stored.
pub const TEXT_KEY: &str = "text";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Text(String),
    Map(IndexMap<String, RawNode>),
    List(Vec<RawNode>),
}

impl RawNode {
    pub fn text_leaf(value: impl Into<String>) -> Self {
        RawNode::Text(value.into())
    }

    pub fn empty_map() -> Self {
        RawNode::Map(IndexMap::new())
    }

    /// Child lookup. A sequence delegates to its first element, matching how a
    /// scalar read treats a repeated element.
    pub fn get(&self, key: &str) -> Option<&RawNode> {
        match self {
            RawNode::Map(map) => map.get(key),
            RawNode::List(items) => items.first().and_then(|first| first.get(key)),
            RawNode::Text(_) => None,
        }
    }

    /// Walk nested mappings, e.g. `["DCP", "HTTP", "Get"]`.
    pub fn path(&self, keys: &[&str]) -> Option<&RawNode> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Text content of this node: the leaf itself, the `text` entry of a
    /// mapping with mixed content, or the first element of a sequence.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawNode::Text(value) => Some(value.as_str()),
            RawNode::Map(map) => map.get(TEXT_KEY).and_then(RawNode::text),
            RawNode::List(items) => items.first().and_then(RawNode::text),
        }
    }

    pub fn child_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(RawNode::text)
    }

    /// Like [`RawNode::child_text`] but collapses empty strings to `None`.
    pub fn child_string(&self, key: &str) -> Option<String> {
        self.child_text(key)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, RawNode::Map(_))
    }

    /// Insert a child, turning an existing entry under the same key into a
    /// sequence so that document order is preserved.
    pub fn push_child(&mut self, key: impl Into<String>, value: RawNode) {
        let RawNode::Map(map) = self else {
            return;
        };
        let key = key.into();
        match map.get_mut(&key) {
            None => {
                map.insert(key, value);
            }
            Some(RawNode::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, RawNode::List(Vec::with_capacity(2)));
                if let RawNode::List(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    }
}

/// Normalize the single-or-many ambiguity of the raw tree.
///
/// * absent → empty
/// * sequence → its elements, in order
/// * anything else → a one-element sequence
pub fn to_sequence(value: Option<&RawNode>) -> Vec<&RawNode> {
    match value {
        None => Vec::new(),
        Some(RawNode::List(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

/// Text of every element under `key`, in order, skipping non-text entries.
pub fn texts(node: &RawNode, key: &str) -> Vec<String> {
    to_sequence(node.get(key))
        .into_iter()
        .filter_map(RawNode::text)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(title: &str) -> RawNode {
        let mut node = RawNode::empty_map();
        node.push_child("Title", RawNode::text_leaf(title));
        node
    }

    #[test]
    fn test_to_sequence_absent_is_empty() {
        assert!(to_sequence(None).is_empty());
    }

    #[test]
    fn test_to_sequence_wraps_single_mapping() {
        let single = layer("Roads");
        let seq = to_sequence(Some(&single));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].child_text("Title"), Some("Roads"));
    }

    #[test]
    fn test_to_sequence_keeps_order() {
        let list = RawNode::List(vec![layer("a"), layer("b"), layer("c")]);
        let titles: Vec<_> = to_sequence(Some(&list))
            .into_iter()
            .filter_map(|n| n.child_text("Title"))
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_to_sequence_wraps_text_leaf() {
        let leaf = RawNode::text_leaf("image/png");
        assert_eq!(to_sequence(Some(&leaf)), vec![&leaf]);
    }

    #[test]
    fn test_push_child_collapses_repeats_into_sequence() {
        let mut contents = RawNode::empty_map();
        contents.push_child("Layer", layer("first"));
        assert!(contents.get("Layer").is_some_and(RawNode::is_map));

        contents.push_child("Layer", layer("second"));
        contents.push_child("Layer", layer("third"));

        let layers = to_sequence(contents.get("Layer"));
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[2].child_text("Title"), Some("third"));
    }

    #[test]
    fn test_text_reads_mixed_content_and_first_of_list() {
        let mut mixed = RawNode::empty_map();
        mixed.push_child("format", RawNode::text_leaf("image/png"));
        mixed.push_child(TEXT_KEY, RawNode::text_leaf("body"));
        assert_eq!(mixed.text(), Some("body"));

        let list = RawNode::List(vec![RawNode::text_leaf("x"), RawNode::text_leaf("y")]);
        assert_eq!(list.text(), Some("x"));
    }

    #[test]
    fn test_path_walks_nested_maps() {
        let mut http = RawNode::empty_map();
        http.push_child("Get", RawNode::text_leaf("endpoint"));
        let mut dcp = RawNode::empty_map();
        dcp.push_child("HTTP", http);
        let mut op = RawNode::empty_map();
        op.push_child("DCP", dcp);

        assert_eq!(
            op.path(&["DCP", "HTTP", "Get"]).and_then(RawNode::text),
            Some("endpoint")
        );
        assert!(op.path(&["DCP", "HTTPS"]).is_none());
    }

    #[test]
    fn test_texts_skips_empty_values() {
        let mut keywords = RawNode::empty_map();
        keywords.push_child("Keyword", RawNode::text_leaf("roads"));
        keywords.push_child("Keyword", RawNode::text_leaf(""));
        keywords.push_child("Keyword", RawNode::text_leaf("rail"));
        assert_eq!(texts(&keywords, "Keyword"), vec!["roads", "rail"]);
    }
}
