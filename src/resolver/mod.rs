//! Key path resolution with language fallback.

/// Placeholder substitution
mod interpolate;

use std::sync::Arc;

pub use interpolate::{
    ReplacementValue,
    Replacements,
    interpolate,
};

use crate::config::ProviderSettings;
use crate::error::ResolveError;
use crate::input::translation::{
    LanguageStringMap,
    TranslationNode,
    TranslationTable,
};

/// Resolves key paths against a shared [`TranslationTable`].
///
/// Stateless apart from the table and its settings: the language is passed
/// on every call, so one resolver can serve any number of callers.
#[derive(Debug, Clone)]
pub struct KeyResolver {
    /// Shared translation data.
    table: Arc<TranslationTable>,
    /// Second lookup tier after the requested language.
    default_language: String,
    /// Splits key paths into segments.
    key_separator: String,
}

impl KeyResolver {
    #[must_use]
    pub fn new(table: Arc<TranslationTable>) -> Self {
        Self::with_settings(table, &ProviderSettings::default())
    }

    #[must_use]
    pub fn with_settings(table: Arc<TranslationTable>, settings: &ProviderSettings) -> Self {
        Self {
            table,
            default_language: settings.default_language.clone(),
            key_separator: settings.key_separator.clone(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Translate `path` for `language`.
    ///
    /// Falls back to the default language, then to `path` itself. Never fails.
    #[must_use]
    pub fn resolve(
        &self,
        path: &str,
        language: &str,
        replacements: Option<&Replacements>,
    ) -> String {
        match self.try_resolve(path, language, replacements) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Missing translation, using key as text: {e}");
                path.to_string()
            }
        }
    }

    /// Like [`Self::resolve`] but reports why a path could not be translated.
    ///
    /// # Errors
    /// See [`ResolveError`].
    pub fn try_resolve(
        &self,
        path: &str,
        language: &str,
        replacements: Option<&Replacements>,
    ) -> Result<String, ResolveError> {
        let template = self.lookup(path, language)?;

        Ok(replacements.map_or_else(
            || template.to_string(),
            |replacements| interpolate(template, replacements),
        ))
    }

    /// Raw template for `path`, without placeholder substitution.
    ///
    /// # Errors
    /// See [`ResolveError`].
    pub fn lookup(&self, path: &str, language: &str) -> Result<&str, ResolveError> {
        let leaf = self.find_leaf(path)?;

        // An empty string counts as untranslated for the requested language,
        // but is returned as-is when it is the default language's entry.
        leaf.get(language)
            .filter(|text| !text.is_empty())
            .or_else(|| leaf.get(&self.default_language))
            .map(String::as_str)
            .ok_or_else(|| ResolveError::MissingLanguage {
                path: path.to_string(),
                language: language.to_string(),
                default_language: self.default_language.clone(),
            })
    }

    /// Walks the table one segment at a time down to a leaf.
    fn find_leaf(&self, path: &str) -> Result<&LanguageStringMap, ResolveError> {
        let not_found = |segment: &str| ResolveError::NotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        };

        let mut node: Option<&TranslationNode> = None;
        for segment in path.split(self.key_separator.as_str()) {
            let children = match node {
                None => self.table.root(),
                Some(TranslationNode::Branch(children)) => children,
                Some(TranslationNode::Leaf(_)) => return Err(not_found(segment)),
            };
            node = Some(children.get(segment).ok_or_else(|| not_found(segment))?);
        }

        match node {
            Some(TranslationNode::Leaf(leaf)) => Ok(leaf),
            Some(TranslationNode::Branch(_)) => {
                Err(ResolveError::BranchNode { path: path.to_string() })
            }
            None => Err(not_found(path)),
        }
    }
}
