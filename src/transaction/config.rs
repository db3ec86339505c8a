//! Transaction mode configuration.
//!
//! A [`TransactionModeConfig`] is the single input of
//! [`TransactionModeBuilder`](crate::transaction::TransactionModeBuilder).
//! It can be assembled with the chainable setters or read from a JSON record
//! of the form `{"tiLevel": 2, "readOnly": true, "deferrable": null}`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::transaction::error::ConfigResult;
use crate::transaction::isolation::IsolationLevel;

/// Isolation level, access mode and deferrability of a transaction.
///
/// The access mode and deferrability are tri-state: `None` means the clause
/// is left out of the command entirely, which is not the same as `Some(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModeConfig {
    /// Isolation level; [`IsolationLevel::None`] emits no clause.
    #[serde(default, deserialize_with = "deserialize_level")]
    pub ti_level: IsolationLevel,
    /// `Some(true)` for `read only`, `Some(false)` for `read write`.
    #[serde(default)]
    pub read_only: Option<bool>,
    /// `Some(true)` for `deferrable`, `Some(false)` for `not deferrable`.
    #[serde(default)]
    pub deferrable: Option<bool>,
}

impl TransactionModeConfig {
    /// Create a configuration with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the isolation level.
    pub fn isolation_level(mut self, level: IsolationLevel) -> Self {
        self.ti_level = level;
        self
    }

    /// Set the access mode.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Set the deferrability.
    ///
    /// Only meaningful to PostgreSQL when the transaction is also serializable
    /// and read only: starting it may then block, but it can no longer fail
    /// with a serialization error.
    pub fn deferrable(mut self, deferrable: bool) -> Self {
        self.deferrable = Some(deferrable);
        self
    }

    /// Read a configuration record from JSON.
    ///
    /// `tiLevel` accepts any JSON value and is normalized with
    /// [`IsolationLevel::normalize`]. Missing or `null` flags stay unset.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<IsolationLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(IsolationLevel::normalize(&value))
}
