//! Session
//!
//! A session is a string-keyed bag of JSON values with a `modified` flag. The
//! flag is what tells a session store that the session needs to be written
//! back at the end of a request.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Errors reading or writing typed session values.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A stored value could not be decoded into the requested type.
    #[error("failed to decode session value {key:?}: {source}")]
    Decode {
        /// Session key
        key: String,

        /// Decode failure
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode session value {key:?}: {source}")]
    Encode {
        /// Session key
        key: String,

        /// Encode failure
        #[source]
        source: serde_json::Error,
    },
}

/// Session data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    values: FxHashMap<String, Value>,

    #[serde(skip)]
    modified: bool,
}

impl Session {
    /// Create an empty, unmodified session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and decode the value stored under `key`.
    ///
    /// Missing keys and explicit `null` values both read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Decode`] if the stored value does not match `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|source| SessionError::Decode {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// Encode and store `value` under `key`, marking the session modified.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Encode`] if `value` cannot be represented as JSON.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value).map_err(|source| SessionError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.values.insert(key.to_string(), value);
        self.modified = true;

        Ok(())
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the session changed since it was loaded.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Whether the session holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
