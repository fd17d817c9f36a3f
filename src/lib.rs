//! i18n-provider
//!
//! ドット区切りのキーによる翻訳の解決（言語フォールバックとプレースホルダー置換）、
//! 基準金額の通貨表示、言語・ミュート設定の永続化を提供する

pub mod config;
pub mod currency;
pub mod error;
pub mod input;
pub mod preference;
pub mod provider;
pub mod resolver;
pub mod sound;

pub use currency::{
    CurrencyFormatter,
    ReferenceAmount,
};
pub use provider::{
    Catalog,
    LocalizationProvider,
};
pub use resolver::{
    KeyResolver,
    ReplacementValue,
    Replacements,
};
