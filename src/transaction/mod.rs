//! Transaction modes and the `BEGIN` commands that open them.
//!
//! # Architecture
//!
//! ```text
//!  ┌──────────────────┐   normalize   ┌───────────────────────┐
//!  │  IsolationLevel  │◄──────────────│ TransactionModeConfig │
//!  │  (registry)      │               │ (typed or JSON record)│
//!  └──────────────────┘               └───────────────────────┘
//!                                                 │
//!                                                 ▼
//!                                     ┌───────────────────────┐
//!                                     │ TransactionModeBuilder│
//!                                     │ (begin / BEGIN text)  │
//!                                     └───────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use txmode::transaction::{IsolationLevel, TransactionModeBuilder, TransactionModeConfig};
//!
//! let config = TransactionModeConfig::new()
//!     .isolation_level(IsolationLevel::Serializable)
//!     .read_only(true)
//!     .deferrable(true);
//! let builder = TransactionModeBuilder::new(&config);
//!
//! assert_eq!(
//!     builder.begin(false),
//!     "begin isolation level serializable read only deferrable"
//! );
//! assert_eq!(
//!     builder.begin(true),
//!     "BEGIN ISOLATION LEVEL SERIALIZABLE READ ONLY DEFERRABLE"
//! );
//! ```

mod builder;
mod config;
mod error;
mod isolation;

pub use builder::TransactionModeBuilder;
pub use config::TransactionModeConfig;
pub use error::{ConfigError, ConfigResult, ParseIsolationLevelError};
pub use isolation::IsolationLevel;
