//! Persisted user preferences (language and sound mute flag).
pub mod storage;
mod store;

pub use storage::{
    JsonFileStore,
    KeyValueStore,
    MemoryStore,
};
pub use store::{
    Preference,
    PreferenceStore,
};
