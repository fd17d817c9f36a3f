//! Translation table input definitions

use std::collections::BTreeMap;

use serde_json::{
    Map,
    Value,
};

use crate::error::TableError;

/// Language code → translated text.
pub type LanguageStringMap = BTreeMap<String, String>;

/// A node of the nested translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// Intermediate node: segment → child node.
    Branch(BTreeMap<String, TranslationNode>),
    /// Terminal node holding one string per language.
    Leaf(LanguageStringMap),
}

/// Immutable nested translation table.
///
/// The root is always a branch. Any key path resolves by descending through
/// branches until it reaches a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationTable {
    #[must_use]
    pub const fn new(root: BTreeMap<String, TranslationNode>) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn builder() -> TranslationTableBuilder {
        TranslationTableBuilder::default()
    }

    /// Build a table from a JSON document.
    ///
    /// An object whose values are all strings becomes a leaf; any other object
    /// becomes a branch. Values that fit neither shape are skipped.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use i18n_provider::input::translation::TranslationTable;
    ///
    /// let table = TranslationTable::from_json(&json!({
    ///     "common": { "hello": { "en": "Hello", "ja": "こんにちは" } }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(table.keys("."), vec!["common.hello".to_string()]);
    /// ```
    ///
    /// # Errors
    /// Returns [`TableError::InvalidRoot`] when the document is not an object.
    pub fn from_json(json: &Value) -> Result<Self, TableError> {
        let Value::Object(map) = json else {
            return Err(TableError::InvalidRoot(json_kind(json)));
        };

        let mut root = BTreeMap::new();
        collect_children(map, None, &mut root);
        tracing::debug!("Loaded translation table with {} top-level entries", root.len());

        Ok(Self { root })
    }

    /// # Errors
    /// Returns an error when the text is not valid JSON or the root is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, TableError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub const fn root(&self) -> &BTreeMap<String, TranslationNode> {
        &self.root
    }

    /// All key paths that end at a leaf, in lexical order.
    #[must_use]
    pub fn keys(&self, separator: &str) -> Vec<String> {
        let mut keys = Vec::new();
        visit_leaves(&self.root, separator, None, &mut |path, _| keys.push(path.to_string()));
        keys
    }

    /// Key paths of leaves that lack `language`.
    ///
    /// Used to report leaves that break the "every leaf has the default
    /// language" expectation; the table itself never enforces it.
    #[must_use]
    pub fn leaves_missing_language(&self, language: &str, separator: &str) -> Vec<String> {
        let mut missing = Vec::new();
        visit_leaves(&self.root, separator, None, &mut |path, leaf| {
            if !leaf.contains_key(language) {
                missing.push(path.to_string());
            }
        });
        missing
    }
}

/// Describes a JSON value kind for error messages.
const fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Converts the children of a JSON object into branch entries.
fn collect_children(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, TranslationNode>,
) {
    for (key, value) in map {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
        match value {
            Value::Object(child) => {
                result.insert(key.clone(), node_from_object(child, &full_key));
            }
            other => {
                tracing::warn!(
                    "Skipping translation entry '{}': expected an object, found {}",
                    full_key,
                    json_kind(other)
                );
            }
        }
    }
}

/// Classifies a JSON object as a leaf or a branch.
fn node_from_object(map: &Map<String, Value>, path: &str) -> TranslationNode {
    let is_leaf = !map.is_empty() && map.values().all(Value::is_string);
    if is_leaf {
        let languages = map
            .iter()
            .filter_map(|(language, text)| {
                text.as_str().map(|text| (language.clone(), text.to_string()))
            })
            .collect();
        return TranslationNode::Leaf(languages);
    }

    let mut children = BTreeMap::new();
    collect_children(map, Some(path), &mut children);
    TranslationNode::Branch(children)
}

/// Depth-first walk calling `f` with each leaf's joined key path.
fn visit_leaves(
    nodes: &BTreeMap<String, TranslationNode>,
    separator: &str,
    prefix: Option<&str>,
    f: &mut dyn FnMut(&str, &LanguageStringMap),
) {
    for (key, node) in nodes {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match node {
            TranslationNode::Branch(children) => {
                visit_leaves(children, separator, Some(&full_key), f);
            }
            TranslationNode::Leaf(leaf) => f(&full_key, leaf),
        }
    }
}

/// Programmatic construction of a [`TranslationTable`].
#[derive(Debug)]
pub struct TranslationTableBuilder {
    /// Nodes inserted so far.
    root: BTreeMap<String, TranslationNode>,
    /// Splits `insert` paths into segments. `"."` unless set.
    separator: String,
}

impl Default for TranslationTableBuilder {
    fn default() -> Self {
        Self { root: BTreeMap::new(), separator: ".".to_string() }
    }
}

impl TranslationTableBuilder {
    /// Splits subsequent `insert` paths on `separator` instead of `"."`.
    ///
    /// Use the resolver's configured key separator here.
    #[must_use]
    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Adds `text` for `language` under `path`.
    ///
    /// Entries that would turn an existing leaf into a branch (or the other
    /// way round) are ignored.
    #[must_use]
    pub fn insert(mut self, path: &str, language: &str, text: &str) -> Self {
        let segments: Vec<&str> = path.split(self.separator.as_str()).collect();
        if !insert_at(&mut self.root, &segments, language, text) {
            tracing::warn!("Ignoring translation '{}' ({}): conflicts with existing entry", path, language);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> TranslationTable {
        TranslationTable::new(self.root)
    }
}

/// Inserts one language string, creating branches along the way.
fn insert_at(
    nodes: &mut BTreeMap<String, TranslationNode>,
    segments: &[&str],
    language: &str,
    text: &str,
) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };

    if rest.is_empty() {
        let node = nodes
            .entry((*first).to_string())
            .or_insert_with(|| TranslationNode::Leaf(LanguageStringMap::new()));
        return match node {
            TranslationNode::Leaf(leaf) => {
                leaf.insert(language.to_string(), text.to_string());
                true
            }
            TranslationNode::Branch(_) => false,
        };
    }

    let node = nodes
        .entry((*first).to_string())
        .or_insert_with(|| TranslationNode::Branch(BTreeMap::new()));
    match node {
        TranslationNode::Branch(children) => insert_at(children, rest, language, text),
        TranslationNode::Leaf(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[fixture]
    fn table() -> TranslationTable {
        TranslationTable::from_json(&json!({
            "header": {
                "title": { "en": "Mines Predictor", "fr": "Prédicteur de Mines" },
                "menu": {
                    "open": { "en": "Open", "de": "Öffnen" }
                }
            },
            "footer": { "en": "Footer only in English" }
        }))
        .unwrap()
    }

    #[rstest]
    fn from_json_classifies_leaves_and_branches(table: TranslationTable) {
        let header = table.root().get("header").unwrap();
        let TranslationNode::Branch(children) = header else {
            panic!("header should be a branch");
        };

        assert_eq!(
            children.get("title"),
            Some(&TranslationNode::Leaf(LanguageStringMap::from([
                ("en".to_string(), "Mines Predictor".to_string()),
                ("fr".to_string(), "Prédicteur de Mines".to_string()),
            ])))
        );
        assert!(matches!(children.get("menu"), Some(TranslationNode::Branch(_))));
        assert!(matches!(table.root().get("footer"), Some(TranslationNode::Leaf(_))));
    }

    #[rstest]
    fn keys_lists_leaf_paths(table: TranslationTable) {
        assert_that!(
            table.keys("."),
            elements_are![eq("footer"), eq("header.menu.open"), eq("header.title")]
        );
        assert_that!(table.keys("/"), contains(eq("header/menu/open")));
    }

    #[rstest]
    fn leaves_missing_language_reports_paths(table: TranslationTable) {
        assert_that!(table.leaves_missing_language("en", "."), is_empty());
        assert_that!(
            table.leaves_missing_language("fr", "."),
            elements_are![eq("footer"), eq("header.menu.open")]
        );
    }

    #[rstest]
    fn from_json_skips_values_of_unknown_shape() {
        let table = TranslationTable::from_json(&json!({
            "count": 3,
            "list": ["a", "b"],
            "group": {
                "ok": { "en": "OK" },
                "stray": "not a language map",
                "flag": true
            }
        }))
        .unwrap();

        assert_that!(table.keys("."), elements_are![eq("group.ok")]);
        assert!(table.root().get("count").is_none());
    }

    #[rstest]
    fn from_json_treats_empty_object_as_branch() {
        let table = TranslationTable::from_json(&json!({ "empty": {} })).unwrap();

        assert_eq!(table.root().get("empty"), Some(&TranslationNode::Branch(BTreeMap::new())));
        assert_that!(table.keys("."), is_empty());
    }

    #[rstest]
    #[case(json!([1, 2]), "an array")]
    #[case(json!("text"), "a string")]
    #[case(json!(null), "null")]
    fn from_json_rejects_non_object_root(#[case] json: Value, #[case] kind: &str) {
        let result = TranslationTable::from_json(&json);

        assert!(matches!(result, Err(TableError::InvalidRoot(k)) if k == kind));
    }

    #[rstest]
    fn from_json_str_reports_parse_errors() {
        assert!(matches!(TranslationTable::from_json_str("{"), Err(TableError::Parse(_))));
    }

    #[rstest]
    fn builder_creates_nested_entries() {
        let table = TranslationTable::builder()
            .insert("game.start", "en", "Start")
            .insert("game.start", "hi", "शुरू")
            .insert("game.stop", "en", "Stop")
            .build();

        assert_that!(table.keys("."), elements_are![eq("game.start"), eq("game.stop")]);
        assert_that!(table.leaves_missing_language("hi", "."), elements_are![eq("game.stop")]);
    }

    #[rstest]
    fn builder_splits_on_configured_separator() {
        let table = TranslationTable::builder()
            .separator("/")
            .insert("menu/sound.on", "en", "Sound on")
            .build();

        assert_that!(table.keys("/"), elements_are![eq("menu/sound.on")]);
        assert_that!(table.keys("."), elements_are![eq("menu.sound.on")]);
    }

    #[rstest]
    fn builder_ignores_conflicting_shapes() {
        let table = TranslationTable::builder()
            .insert("game", "en", "Game")
            .insert("game.start", "en", "Start")
            .build();

        assert_that!(table.keys("."), elements_are![eq("game")]);
    }
}
