//! `BEGIN` command text for a transaction mode.

use std::fmt;

use crate::transaction::config::TransactionModeConfig;

/// Precomputed `BEGIN` command for one [`TransactionModeConfig`].
///
/// Both spellings are built once, at construction:
///
/// ```text
/// begin [isolation level <level>] [read only|read write] [deferrable|not deferrable]
/// ```
///
/// Clauses always appear in that order and absent settings contribute
/// nothing. Construction cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionModeBuilder {
    begin: String,
    begin_upper: String,
}

impl TransactionModeBuilder {
    /// Build the command text for `config`.
    pub fn new(config: &TransactionModeConfig) -> Self {
        let mut begin = String::from("begin");

        let access = config.read_only.map(|read_only| {
            if read_only {
                "read only"
            } else {
                "read write"
            }
        });
        let deferrable = config.deferrable.map(|deferrable| {
            if deferrable {
                "deferrable"
            } else {
                "not deferrable"
            }
        });

        for clause in [config.ti_level.clause(), access, deferrable]
            .into_iter()
            .flatten()
        {
            begin.push(' ');
            begin.push_str(clause);
        }

        let begin_upper = begin.to_uppercase();
        log::trace!("built transaction mode {config:?}: {begin}");

        Self { begin, begin_upper }
    }

    /// The command text, upper-cased when `upper` is true.
    pub fn begin(&self, upper: bool) -> &str {
        if upper {
            &self.begin_upper
        } else {
            &self.begin
        }
    }
}

impl Default for TransactionModeBuilder {
    fn default() -> Self {
        Self::new(&TransactionModeConfig::default())
    }
}

impl From<TransactionModeConfig> for TransactionModeBuilder {
    fn from(config: TransactionModeConfig) -> Self {
        Self::new(&config)
    }
}

impl From<&TransactionModeConfig> for TransactionModeBuilder {
    fn from(config: &TransactionModeConfig) -> Self {
        Self::new(config)
    }
}

impl fmt::Display for TransactionModeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.begin)
    }
}
