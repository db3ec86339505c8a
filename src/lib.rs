//! txmode - `BEGIN` command text for PostgreSQL transaction modes.
//!
//! This crate turns an isolation level, an access mode and a deferrable mode
//! into the command that opens a transaction with those settings. It is a
//! pure helper for database clients: it holds no connection and never fails.
//!
//! # Example
//!
//! ```
//! use txmode::{TransactionModeBuilder, TransactionModeConfig};
//!
//! let config = TransactionModeConfig::from_json(r#"{"tiLevel": 2, "readOnly": true}"#).unwrap();
//! let builder = TransactionModeBuilder::new(&config);
//! assert_eq!(builder.begin(false), "begin isolation level repeatable read read only");
//! ```

pub mod transaction;

pub use transaction::{IsolationLevel, TransactionModeBuilder, TransactionModeConfig};
