//! Reference amount → locale currency string.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::ProviderSettings;
use crate::error::UnsupportedAmount;
use crate::input::currency::{
    CurrencyTables,
    SymbolPosition,
};

/// The closed set of base-currency amounts the application displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceAmount {
    FiveHundred,
    FourHundred,
}

impl ReferenceAmount {
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::FiveHundred => 500,
            Self::FourHundred => 400,
        }
    }
}

impl TryFrom<u32> for ReferenceAmount {
    type Error = UnsupportedAmount;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            500 => Ok(Self::FiveHundred),
            400 => Ok(Self::FourHundred),
            other => Err(UnsupportedAmount(other)),
        }
    }
}

impl fmt::Display for ReferenceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Formats reference amounts using static per-language tables.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    /// Per-language symbols and converted amounts.
    tables: Arc<CurrencyTables>,
    /// Symbol of the unconverted fallback.
    base_symbol: String,
    /// Languages that always get the unconverted amount.
    base_languages: HashSet<String>,
    /// Thousands separator for post-positioned amounts.
    grouping_separator: String,
}

impl CurrencyFormatter {
    #[must_use]
    pub fn new(tables: Arc<CurrencyTables>) -> Self {
        Self::with_settings(tables, &ProviderSettings::default())
    }

    #[must_use]
    pub fn with_settings(tables: Arc<CurrencyTables>, settings: &ProviderSettings) -> Self {
        Self {
            tables,
            base_symbol: settings.base_currency.symbol.clone(),
            base_languages: settings.base_currency.languages.iter().cloned().collect(),
            grouping_separator: settings.grouping_separator.clone(),
        }
    }

    #[must_use]
    pub fn tables(&self) -> &CurrencyTables {
        &self.tables
    }

    /// Render `amount` for `language`.
    ///
    /// Base-currency languages and languages missing from either table get
    /// the base symbol followed by the unconverted amount.
    #[must_use]
    pub fn format(&self, amount: ReferenceAmount, language: &str) -> String {
        if self.base_languages.contains(language) {
            return self.format_base(amount);
        }

        let (Some(info), Some(conversion)) =
            (self.tables.info.get(language), self.tables.conversions.get(language))
        else {
            tracing::debug!("No currency data for '{}', using base currency", language);
            return self.format_base(amount);
        };

        let converted = match amount {
            ReferenceAmount::FiveHundred => conversion.five_hundred,
            ReferenceAmount::FourHundred => conversion.four_hundred,
        };

        match info.position {
            SymbolPosition::Pre => format!("{}{converted}", info.symbol),
            SymbolPosition::Post => {
                format!("{}{}", group_thousands(converted, &self.grouping_separator), info.symbol)
            }
        }
    }

    /// Base symbol directly followed by the unconverted amount.
    fn format_base(&self, amount: ReferenceAmount) -> String {
        format!("{}{amount}", self.base_symbol)
    }
}

/// Groups decimal digits in threes from the right.
///
/// ```
/// use i18n_provider::currency::group_thousands;
///
/// assert_eq!(group_thousands(305_000, ","), "305,000");
/// assert_eq!(group_thousands(48, ","), "48");
/// ```
#[must_use]
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 * separator.len());

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(digit);
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::input::currency::{
        Conversion,
        CurrencyInfo,
    };

    #[fixture]
    fn formatter() -> CurrencyFormatter {
        CurrencyFormatter::new(Arc::new(CurrencyTables::builtin()))
    }

    #[rstest]
    #[case(ReferenceAmount::FiveHundred, "en", "₹500")]
    #[case(ReferenceAmount::FourHundred, "en", "₹400")]
    #[case(ReferenceAmount::FourHundred, "hi", "₹400")]
    #[case(ReferenceAmount::FiveHundred, "bn", "৳689")]
    #[case(ReferenceAmount::FourHundred, "bn", "৳551")]
    #[case(ReferenceAmount::FiveHundred, "ko", "₩16590")]
    #[case(ReferenceAmount::FiveHundred, "id", "Rp97500")]
    #[case(ReferenceAmount::FiveHundred, "pl", "48zł")]
    #[case(ReferenceAmount::FiveHundred, "ru", "1,050₽")]
    #[case(ReferenceAmount::FiveHundred, "vi", "305,000₫")]
    #[case(ReferenceAmount::FourHundred, "fa", "403,200﷼")]
    #[case(ReferenceAmount::FourHundred, "hu", "3,464Ft")]
    fn format_uses_language_tables(
        formatter: CurrencyFormatter,
        #[case] amount: ReferenceAmount,
        #[case] language: &str,
        #[case] expected: &str,
    ) {
        assert_that!(formatter.format(amount, language), eq(expected));
    }

    #[rstest]
    #[case("xx")]
    #[case("")]
    #[case("EN")]
    fn format_unknown_language_matches_english(
        formatter: CurrencyFormatter,
        #[case] language: &str,
    ) {
        for amount in [ReferenceAmount::FiveHundred, ReferenceAmount::FourHundred] {
            assert_that!(formatter.format(amount, language), eq(&formatter.format(amount, "en")));
        }
    }

    #[rstest]
    fn format_base_languages_ignore_conversion_data() {
        let mut tables = CurrencyTables::builtin();
        tables.info.insert("hi".to_string(), CurrencyInfo::new("X", SymbolPosition::Pre));
        tables
            .conversions
            .insert("hi".to_string(), Conversion { five_hundred: 1, four_hundred: 1 });
        let formatter = CurrencyFormatter::new(Arc::new(tables));

        assert_that!(formatter.format(ReferenceAmount::FiveHundred, "hi"), eq("₹500"));
    }

    #[rstest]
    fn format_falls_back_when_one_table_lacks_language() {
        let mut tables = CurrencyTables::default();
        tables.info.insert("aa".to_string(), CurrencyInfo::new("A", SymbolPosition::Pre));
        tables
            .conversions
            .insert("bb".to_string(), Conversion { five_hundred: 9, four_hundred: 8 });
        let formatter = CurrencyFormatter::new(Arc::new(tables));

        assert_that!(formatter.format(ReferenceAmount::FiveHundred, "aa"), eq("₹500"));
        assert_that!(formatter.format(ReferenceAmount::FourHundred, "bb"), eq("₹400"));
    }

    #[rstest]
    fn format_uses_configured_base_currency() {
        let settings = ProviderSettings {
            grouping_separator: " ".to_string(),
            base_currency: crate::config::BaseCurrencyConfig {
                symbol: "Rs.".to_string(),
                languages: vec!["en".to_string()],
            },
            ..ProviderSettings::default()
        };
        let formatter =
            CurrencyFormatter::with_settings(Arc::new(CurrencyTables::builtin()), &settings);

        assert_that!(formatter.format(ReferenceAmount::FiveHundred, "en"), eq("Rs.500"));
        assert_that!(formatter.format(ReferenceAmount::FiveHundred, "hi"), eq("Rs.500"));
        assert_that!(formatter.format(ReferenceAmount::FiveHundred, "vi"), eq("305 000₫"));
    }

    #[rstest]
    fn format_is_idempotent(formatter: CurrencyFormatter) {
        let first = formatter.format(ReferenceAmount::FiveHundred, "pl");
        let second = formatter.format(ReferenceAmount::FiveHundred, "pl");

        assert_that!(first, eq(&second));
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(16590, "16,590")]
    #[case(504_000, "504,000")]
    #[case(1_234_567, "1,234,567")]
    fn group_thousands_cases(#[case] value: u64, #[case] expected: &str) {
        assert_that!(group_thousands(value, ","), eq(expected));
    }

    #[rstest]
    fn reference_amount_conversions() {
        assert_eq!(ReferenceAmount::try_from(500), Ok(ReferenceAmount::FiveHundred));
        assert_eq!(ReferenceAmount::try_from(400), Ok(ReferenceAmount::FourHundred));
        assert_eq!(ReferenceAmount::try_from(450), Err(UnsupportedAmount(450)));
        assert_that!(ReferenceAmount::FourHundred.to_string(), eq("400"));
    }
}
