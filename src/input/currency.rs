//! Currency display data input definitions

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `৳689`
    Pre,
    /// `48zł`
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencyInfo {
    pub symbol: String,
    pub position: SymbolPosition,
}

impl CurrencyInfo {
    #[must_use]
    pub fn new(symbol: impl Into<String>, position: SymbolPosition) -> Self {
        Self { symbol: symbol.into(), position }
    }
}

/// Converted numerals for the two reference amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Conversion {
    #[serde(rename = "500")]
    pub five_hundred: u64,
    #[serde(rename = "400")]
    pub four_hundred: u64,
}

/// Language code → converted numerals.
pub type ConversionTable = HashMap<String, Conversion>;

/// Static per-language currency data.
///
/// `info` and `conversions` are independent maps. A language needs an entry in
/// both to get its own currency; anything else renders in the base currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyTables {
    pub info: HashMap<String, CurrencyInfo>,
    pub conversions: ConversionTable,
}

/// (language, symbol, position, converted 500, converted 400)
type BuiltinRow = (&'static str, &'static str, SymbolPosition, u64, u64);

/// Currency data shipped with the application.
const BUILTIN: &[BuiltinRow] = &[
    ("bn", "৳", SymbolPosition::Pre, 689, 551),
    ("ur", "Rs", SymbolPosition::Pre, 1599, 1279),
    ("ne", "रू", SymbolPosition::Pre, 800, 640),
    ("ru", "₽", SymbolPosition::Post, 1050, 840),
    ("es", "€", SymbolPosition::Pre, 6, 5),
    ("fr", "€", SymbolPosition::Pre, 6, 5),
    ("de", "€", SymbolPosition::Pre, 6, 5),
    ("pt", "€", SymbolPosition::Pre, 6, 5),
    ("it", "€", SymbolPosition::Pre, 6, 5),
    ("zh", "¥", SymbolPosition::Pre, 87, 70),
    ("ja", "¥", SymbolPosition::Pre, 1890, 1512),
    ("ko", "₩", SymbolPosition::Pre, 16590, 13272),
    ("ar", "﷼", SymbolPosition::Pre, 45, 36),
    ("tr", "₺", SymbolPosition::Pre, 390, 312),
    ("nl", "€", SymbolPosition::Pre, 6, 5),
    ("pl", "zł", SymbolPosition::Post, 48, 38),
    ("sv", "kr", SymbolPosition::Post, 125, 100),
    ("no", "kr", SymbolPosition::Post, 128, 102),
    ("da", "kr", SymbolPosition::Post, 82, 66),
    ("fi", "€", SymbolPosition::Pre, 6, 5),
    ("id", "Rp", SymbolPosition::Pre, 97500, 78000),
    ("vi", "₫", SymbolPosition::Post, 305_000, 244_000),
    ("th", "฿", SymbolPosition::Pre, 440, 352),
    ("ms", "RM", SymbolPosition::Pre, 56, 45),
    ("fil", "₱", SymbolPosition::Pre, 700, 560),
    ("el", "€", SymbolPosition::Pre, 6, 5),
    ("cs", "Kč", SymbolPosition::Post, 275, 220),
    ("hu", "Ft", SymbolPosition::Post, 4330, 3464),
    ("ro", "lei", SymbolPosition::Post, 55, 44),
    ("uk", "₴", SymbolPosition::Pre, 480, 384),
    ("he", "₪", SymbolPosition::Pre, 44, 35),
    ("fa", "﷼", SymbolPosition::Post, 504_000, 403_200),
];

impl CurrencyTables {
    /// The built-in data set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tables = Self::default();
        for &(language, symbol, position, five_hundred, four_hundred) in BUILTIN {
            tables.info.insert(language.to_string(), CurrencyInfo::new(symbol, position));
            tables
                .conversions
                .insert(language.to_string(), Conversion { five_hundred, four_hundred });
        }
        tables
    }

    /// # Errors
    /// Returns an error when the text does not match the table schema.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Languages that appear in only one of the two maps.
    #[must_use]
    pub fn incomplete_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self
            .info
            .keys()
            .filter(|language| !self.conversions.contains_key(*language))
            .chain(self.conversions.keys().filter(|language| !self.info.contains_key(*language)))
            .map(String::as_str)
            .collect();
        languages.sort_unstable();
        languages
    }
}
