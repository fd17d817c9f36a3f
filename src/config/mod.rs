//! Provider configuration.
/// Configuration types, validation and file loading
mod types;

pub use types::{
    BaseCurrencyConfig,
    CONFIG_FILE_NAME,
    ConfigError,
    ProviderSettings,
    StorageKeysConfig,
    ValidationError,
};
