//! 言語設定とミュート状態の永続化

use serde::{
    Deserialize,
    Serialize,
};

use super::storage::KeyValueStore;
use crate::config::{
    ProviderSettings,
    StorageKeysConfig,
};

/// ユーザーの表示設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    /// 選択中の言語コード
    pub language_code: String,
    /// 効果音をミュートしているか
    pub is_muted: bool,
}

impl Preference {
    #[must_use]
    pub fn new(language_code: impl Into<String>, is_muted: bool) -> Self {
        Self { language_code: language_code.into(), is_muted }
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self::new("en", false)
    }
}

/// 設定をストレージに読み書きするアダプター
///
/// ストレージの失敗は呼び出し元に伝播させず、ログに記録してデフォルト値で補う。
#[derive(Debug)]
pub struct PreferenceStore<S> {
    /// 永続化先
    storage: S,
    /// ストレージのキー
    keys: StorageKeysConfig,
    /// 値が読めない場合の言語
    default_language: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, &ProviderSettings::default())
    }

    #[must_use]
    pub fn with_settings(storage: S, settings: &ProviderSettings) -> Self {
        Self {
            storage,
            keys: settings.storage.clone(),
            default_language: settings.default_language.clone(),
        }
    }

    /// 保存された設定を読み込む
    ///
    /// 各項目は独立して読み込まれ、読めなかった項目だけがデフォルト値になる。
    #[must_use]
    pub fn load(&self) -> Preference {
        Preference { language_code: self.load_language(), is_muted: self.load_muted() }
    }

    /// 言語コードを読み込む（空・未保存・読み込み失敗時はデフォルト言語）
    fn load_language(&self) -> String {
        match self.storage.get(&self.keys.language_key) {
            Ok(Some(code)) if !code.is_empty() => code,
            Ok(_) => self.default_language.clone(),
            Err(e) => {
                tracing::error!("Could not read language from storage: {e}");
                self.default_language.clone()
            }
        }
    }

    /// ミュート状態を読み込む（JSON の真偽値以外は `false`）
    fn load_muted(&self) -> bool {
        match self.storage.get(&self.keys.muted_key) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                tracing::error!("Could not parse stored mute flag {raw:?}: {e}");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::error!("Could not read mute flag from storage: {e}");
                false
            }
        }
    }

    /// 言語コードを保存する
    ///
    /// # Returns
    /// 書き込みに成功したかどうか（失敗はログに記録済み）
    pub fn save_language(&mut self, code: &str) -> bool {
        match self.storage.set(&self.keys.language_key, code) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Could not save language to storage: {e}");
                false
            }
        }
    }

    /// ミュート状態を保存する（`"true"` / `"false"`）
    ///
    /// # Returns
    /// 書き込みに成功したかどうか（失敗はログに記録済み）
    pub fn save_muted(&mut self, muted: bool) -> bool {
        let raw = if muted { "true" } else { "false" };
        match self.storage.set(&self.keys.muted_key, raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Could not save mute flag to storage: {e}");
                false
            }
        }
    }

    /// 保存された設定を削除する
    pub fn clear(&mut self) -> bool {
        let mut cleared = true;
        for key in [&self.keys.language_key, &self.keys.muted_key] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!("Could not remove '{key}' from storage: {e}");
                cleared = false;
            }
        }
        cleared
    }

    /// 永続化先を取得
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// 永続化先を可変で取得
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
