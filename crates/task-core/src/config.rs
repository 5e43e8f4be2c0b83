//! Store Configuration

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Storage key holding user settings
pub const SETTINGS_KEY: &str = "settings";

/// What `initialize` does when the persisted list does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log a warning and start from an empty list
    #[default]
    Reset,
    /// Report the error and keep the current list
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Key the task list is stored under
    pub storage_key: String,
    pub on_malformed: MalformedPolicy,
    /// Persist after every mutation instead of on explicit save
    pub auto_save: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_string(),
            on_malformed: MalformedPolicy::Reset,
            auto_save: false,
        }
    }
}

impl StoreConfig {
    /// Read settings stored under [`SETTINGS_KEY`], falling back to defaults.
    ///
    /// Unparseable settings are logged and ignored; storage failures are returned.
    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> StoreResult<Self> {
        let Some(raw) = storage.get(SETTINGS_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("ignoring malformed settings under '{}': {}", SETTINGS_KEY, e);
                Ok(Self::default())
            }
        }
    }
}
