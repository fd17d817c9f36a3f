//! The localization provider handed to UI code.
//!
//! Owns the current [`Preference`] and fans it out to the resolver, the
//! currency formatter and the sound cue player. Nothing here is global: call
//! sites receive the provider (or a snapshot of its preference) explicitly.

use std::sync::Arc;

use crate::config::ProviderSettings;
use crate::currency::{
    CurrencyFormatter,
    ReferenceAmount,
};
use crate::input::currency::CurrencyTables;
use crate::input::translation::TranslationTable;
use crate::preference::{
    KeyValueStore,
    Preference,
    PreferenceStore,
};
use crate::resolver::{
    KeyResolver,
    Replacements,
};
use crate::sound::{
    Cue,
    CuePlayer,
    SilentCuePlayer,
};

/// Static data the provider reads from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Translations looked up by key path.
    pub translations: Arc<TranslationTable>,
    /// Symbols and conversions per language.
    pub currency: Arc<CurrencyTables>,
}

impl Catalog {
    #[must_use]
    pub fn new(translations: TranslationTable, currency: CurrencyTables) -> Self {
        Self { translations: Arc::new(translations), currency: Arc::new(currency) }
    }
}

/// Session-scoped localization state.
pub struct LocalizationProvider<S> {
    /// Persists preference changes.
    store: PreferenceStore<S>,
    /// Translation lookups.
    resolver: KeyResolver,
    /// Reference amount display.
    formatter: CurrencyFormatter,
    /// Silent unless replaced with [`Self::with_cue_player`].
    cue_player: Box<dyn CuePlayer>,
    /// Replaced as a whole on every change; snapshots handed out earlier
    /// keep their value.
    preference: Arc<Preference>,
}

impl<S: KeyValueStore> LocalizationProvider<S> {
    /// Create a provider, reading the stored preference once.
    #[must_use]
    pub fn new(settings: &ProviderSettings, catalog: Catalog, storage: S) -> Self {
        let store = PreferenceStore::with_settings(storage, settings);
        let preference = store.load();
        tracing::debug!(
            "Localization provider initialized: language={}, muted={}",
            preference.language_code,
            preference.is_muted
        );

        Self {
            store,
            resolver: KeyResolver::with_settings(catalog.translations, settings),
            formatter: CurrencyFormatter::with_settings(catalog.currency, settings),
            cue_player: Box::new(SilentCuePlayer),
            preference: Arc::new(preference),
        }
    }

    #[must_use]
    pub fn with_cue_player(mut self, player: impl CuePlayer + 'static) -> Self {
        self.cue_player = Box::new(player);
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.preference.language_code
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.preference.is_muted
    }

    /// Immutable view of the current preference.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Preference> {
        Arc::clone(&self.preference)
    }

    /// Switch language and persist it (best effort).
    pub fn set_language(&mut self, code: &str) {
        tracing::debug!("Language changed: {} -> {}", self.preference.language_code, code);
        self.preference =
            Arc::new(Preference { language_code: code.to_string(), ..(*self.preference).clone() });
        if !self.store.save_language(code) {
            tracing::debug!("Language change kept for this session only");
        }
    }

    /// Flip the mute flag, persist it (best effort) and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.cue_player.resume();

        let is_muted = !self.preference.is_muted;
        self.preference = Arc::new(Preference { is_muted, ..(*self.preference).clone() });
        if !self.store.save_muted(is_muted) {
            tracing::debug!("Mute change kept for this session only");
        }
        is_muted
    }

    /// Translate `path` for the current language.
    #[must_use]
    pub fn t(&self, path: &str, replacements: Option<&Replacements>) -> String {
        self.resolver.resolve(path, self.language(), replacements)
    }

    /// Format `amount` for the current language.
    #[must_use]
    pub fn format_currency(&self, amount: ReferenceAmount) -> String {
        self.formatter.format(amount, self.language())
    }

    /// Play `cue` unless muted. Player failures are logged and dropped.
    pub fn play_cue(&self, cue: Cue) {
        if self.preference.is_muted {
            return;
        }

        if let Err(e) = self.cue_player.play(cue) {
            tracing::warn!("{e}");
        }
    }

    #[must_use]
    pub const fn resolver(&self) -> &KeyResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    #[must_use]
    pub const fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut PreferenceStore<S> {
        &mut self.store
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for LocalizationProvider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationProvider")
            .field("store", &self.store)
            .field("resolver", &self.resolver)
            .field("formatter", &self.formatter)
            .field("cue_player", &"<dyn CuePlayer>")
            .field("preference", &self.preference)
            .finish()
    }
}
