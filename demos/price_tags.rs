//! 言語ごとの価格表示デモ
//!
//! 使用方法:
//! ```
//! cargo run --example price_tags -- <language> [config_dir]
//! ```
//!
//! 選択した言語は `config_dir/.i18n-provider-storage.json` に保存され、
//! 次回の起動時に引数を省略すると復元される。

use std::path::PathBuf;

use i18n_provider::config::ProviderSettings;
use i18n_provider::input::currency::CurrencyTables;
use i18n_provider::input::translation::TranslationTable;
use i18n_provider::preference::JsonFileStore;
use i18n_provider::sound::Cue;
use i18n_provider::{
    Catalog,
    LocalizationProvider,
    ReferenceAmount,
    Replacements,
};
use serde_json::json;

fn main() {
    // tracing を初期化（デフォルトは WARN レベル）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config_dir = args.get(2).map_or_else(std::env::temp_dir, PathBuf::from);

    let settings = match ProviderSettings::load_or_default(&config_dir) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let translations = match TranslationTable::from_json(&demo_translations()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let storage = JsonFileStore::new(config_dir.join(".i18n-provider-storage.json"));
    let mut provider = LocalizationProvider::new(
        &settings,
        Catalog::new(translations, CurrencyTables::builtin()),
        storage,
    );

    if let Some(language) = args.get(1) {
        provider.set_language(language);
    }
    provider.play_cue(Cue::ButtonClick);

    println!("=== {} ({}) ===", provider.t("app.title", None), provider.language());
    for (plan, amount) in [
        ("app.plans.standard", ReferenceAmount::FiveHundred),
        ("app.plans.lite", ReferenceAmount::FourHundred),
    ] {
        let price = provider.format_currency(amount);
        let replacements = Replacements::from([("price".to_string(), price.into())]);
        println!("  {}", provider.t(plan, Some(&replacements)));
    }
    println!("  {}", provider.t("app.missing", None));
}

/// デモ用の翻訳データ（一部の言語は意図的に欠けている）
fn demo_translations() -> serde_json::Value {
    json!({
        "app": {
            "title": {
                "en": "Mines Predictor",
                "hi": "माइंस प्रेडिक्टर",
                "pl": "Przewidywacz Min",
                "bn": "মাইনস প্রেডিক্টর"
            },
            "plans": {
                "standard": {
                    "en": "Standard access: {price}",
                    "pl": "Dostęp standardowy: {price}"
                },
                "lite": {
                    "en": "Lite access: {price}",
                    "bn": "লাইট অ্যাক্সেস: {price}"
                }
            }
        }
    })
}
