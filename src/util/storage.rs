//! Browser localStorage helpers for persisted widget preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets persist small pieces of UI state (expanded accordion items, theme,
//! discovered shortcuts) without repeating web-sys glue. Every key is
//! namespaced under [`KEY_PREFIX`] so the front end's own keys never collide.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. The `try_*` functions surface a
//! [`StorageError`]; the plain variants log and swallow it, which is what
//! rendering code wants.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Prefix applied to every key written by this crate.
pub const KEY_PREFIX: &str = "trade_widgets:";

/// Error returned by the fallible storage helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No window, or the browser denied access to `localStorage`.
    #[error("localStorage is unavailable")]
    Unavailable,
    /// The value could not be encoded as JSON.
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The stored string was not valid JSON for the requested type.
    #[error("failed to decode value for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// `setItem`/`removeItem` threw (quota exceeded, private mode).
    #[error("localStorage rejected write for {key}")]
    Write { key: String },
}

/// Apply the crate prefix to `key` unless it already carries it.
#[must_use]
pub fn namespaced_key(key: &str) -> String {
    if key.starts_with(KEY_PREFIX) {
        key.to_owned()
    } else {
        format!("{KEY_PREFIX}{key}")
    }
}

/// Encode `value` the way it is written to storage.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] when serialization fails.
pub fn encode_json<T: Serialize>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })
}

/// Decode a raw stored string.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] when `raw` is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Decode { key: key.to_owned(), source })
}

/// Load a JSON value for `key`, surfacing every failure.
///
/// `Ok(None)` means storage works but nothing is stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] outside the browser and when access is
/// denied, or [`StorageError::Decode`] for corrupt entries.
pub fn try_load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let key = namespaced_key(key);
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(&key).map_err(|_| StorageError::Unavailable)?;
        raw.map(|raw| decode_json(&key, &raw)).transpose()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}

/// Save a JSON value for `key`, surfacing every failure.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] for unserializable values,
/// [`StorageError::Unavailable`] outside the browser, or
/// [`StorageError::Write`] when the browser rejects the write.
pub fn try_save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let key = namespaced_key(key);
    let raw = encode_json(&key, value)?;
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.set_item(&key, &raw).map_err(|_| StorageError::Write { key })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
        Err(StorageError::Unavailable)
    }
}

/// Load a JSON value for `key`, logging and discarding failures.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    match try_load_json(key) {
        Ok(value) => value,
        Err(err) => {
            report(&err);
            None
        }
    }
}

/// Save a JSON value for `key`, logging and discarding failures.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = try_save_json(key, value) {
        report(&err);
    }
}

/// Delete the entry stored under `key`.
pub fn remove(key: &str) {
    let key = namespaced_key(key);
    #[cfg(feature = "hydrate")]
    {
        let result = local_storage().and_then(|storage| {
            storage
                .remove_item(&key)
                .map_err(|_| StorageError::Write { key: key.clone() })
        });
        if let Err(err) = result {
            report(&err);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn report(err: &StorageError) {
    #[cfg(feature = "hydrate")]
    log::warn!("storage: {err}");
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}
