//! Provider settings and the `.i18n-provider.json` file they are read from.

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Settings file looked up by [`ProviderSettings::load_from_dir`].
pub const CONFIG_FILE_NAME: &str = ".i18n-provider.json";

/// One invalid settings field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "storage.languageKey")
    pub field_path: String,
    /// What is wrong and an example of a valid value
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Why settings could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every invalid field, in field order.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file exists but cannot be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`ProviderSettings`].
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings shared by the resolver, the currency formatter and the
/// preference store. Every field is optional in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// Language used when a translation has no entry for the requested one.
    /// Also the initial language before anything is stored.
    pub default_language: String,

    /// Separator between key path segments.
    pub key_separator: String,

    /// Currency shown when a language has no conversion data.
    pub base_currency: BaseCurrencyConfig,

    /// Thousands separator for post-positioned currency amounts.
    pub grouping_separator: String,

    /// Keys under which the preference is persisted.
    pub storage: StorageKeysConfig,
}

/// The currency reference amounts are denominated in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseCurrencyConfig {
    /// Prefixed to the unconverted amount.
    pub symbol: String,

    /// Languages always rendered in the base currency, even when conversion
    /// data exists for them.
    pub languages: Vec<String>,
}

impl Default for BaseCurrencyConfig {
    fn default() -> Self {
        Self { symbol: "₹".to_string(), languages: vec!["en".to_string(), "hi".to_string()] }
    }
}

/// Storage key names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageKeysConfig {
    /// Key of the language code.
    pub language_key: String,
    /// Key of the mute flag (`"true"` / `"false"`).
    pub muted_key: String,
}

impl Default for StorageKeysConfig {
    fn default() -> Self {
        Self {
            language_key: "mines-predictor-lang".to_string(),
            muted_key: "mines-predictor-sound-muted".to_string(),
        }
    }
}

impl ProviderSettings {
    /// Reads and validates `dir/.i18n-provider.json`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Fields missing from
    /// the file keep their defaults.
    ///
    /// # Errors
    /// - The file cannot be read
    /// - The file is not valid JSON for these settings
    /// - The resulting settings fail [`Self::validate`]
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Configuration file not found: {:?}", path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let settings: Self = serde_json::from_str(&content)?;
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Loaded provider settings from {:?}: {:?}", path, settings);

        Ok(Some(settings))
    }

    /// Like [`Self::load_from_dir`], with defaults when there is no file.
    ///
    /// # Errors
    /// See [`Self::load_from_dir`].
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_from_dir(dir)?.unwrap_or_default())
    }

    /// # Errors
    /// - Required field is empty
    /// - Storage keys collide
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The default language cannot be empty. Example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.base_currency.symbol.is_empty() {
            errors.push(ValidationError::new(
                "baseCurrency.symbol",
                "The base currency symbol cannot be empty. Example: \"₹\"",
            ));
        }

        for (index, language) in self.base_currency.languages.iter().enumerate() {
            if language.is_empty() {
                errors.push(ValidationError::new(
                    format!("baseCurrency.languages[{index}]"),
                    "Language codes cannot be empty",
                ));
            }
        }

        if self.storage.language_key.is_empty() {
            errors.push(ValidationError::new(
                "storage.languageKey",
                "The storage key cannot be empty",
            ));
        }

        if self.storage.muted_key.is_empty() {
            errors.push(ValidationError::new("storage.mutedKey", "The storage key cannot be empty"));
        }

        if !self.storage.language_key.is_empty()
            && self.storage.language_key == self.storage.muted_key
        {
            errors.push(ValidationError::new(
                "storage.languageKey/storage.mutedKey",
                "The language and mute flag cannot share a storage key",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            key_separator: ".".to_string(),
            base_currency: BaseCurrencyConfig::default(),
            grouping_separator: ",".to_string(),
            storage: StorageKeysConfig::default(),
        }
    }
}
