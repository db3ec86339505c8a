//! Transaction isolation levels.
//!
//! The registry is a closed enum with fixed numeric values, so callers can
//! refer to a level by name instead of by number:
//! - None (0): no isolation clause is emitted
//! - Serializable (1)
//! - RepeatableRead (2)
//! - ReadCommitted (3)

use std::fmt;

use serde_json::Value;

use crate::transaction::error::ParseIsolationLevelError;

/// Transaction isolation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum IsolationLevel {
    /// No isolation level requested; the server default applies.
    #[default]
    None = 0,

    /// The reads and writes of the transaction must be committable as an
    /// atomic unit with respect to all other serializable transactions.
    Serializable = 1,

    /// All statements see the snapshot taken before the first query of the
    /// transaction.
    RepeatableRead = 2,

    /// Each statement sees rows committed before it began.
    ReadCommitted = 3,
}

impl IsolationLevel {
    /// Every level, in value order.
    pub const ALL: [IsolationLevel; 4] = [
        IsolationLevel::None,
        IsolationLevel::Serializable,
        IsolationLevel::RepeatableRead,
        IsolationLevel::ReadCommitted,
    ];

    /// The fixed integer value of this level.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The symbolic name of this level.
    pub fn name(self) -> &'static str {
        match self {
            IsolationLevel::None => "none",
            IsolationLevel::Serializable => "serializable",
            IsolationLevel::RepeatableRead => "repeatableRead",
            IsolationLevel::ReadCommitted => "readCommitted",
        }
    }

    /// The `isolation level ...` fragment of a `BEGIN` command, if any.
    pub fn clause(self) -> Option<&'static str> {
        match self {
            IsolationLevel::None => None,
            IsolationLevel::Serializable => Some("isolation level serializable"),
            IsolationLevel::RepeatableRead => Some("isolation level repeatable read"),
            IsolationLevel::ReadCommitted => Some("isolation level read committed"),
        }
    }

    /// Look up a level by integer value.
    ///
    /// Anything outside `1..=3` maps to [`IsolationLevel::None`].
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => IsolationLevel::Serializable,
            2 => IsolationLevel::RepeatableRead,
            3 => IsolationLevel::ReadCommitted,
            _ => IsolationLevel::None,
        }
    }

    /// Coerce a loosely-typed level into a registry member.
    ///
    /// Only values that compare greater than zero as numbers are considered.
    /// Those are truncated to the integer prefix of their textual form and
    /// looked up with [`IsolationLevel::from_value`]. Everything else,
    /// including non-numeric strings, booleans, `null`, arrays and objects,
    /// is [`IsolationLevel::None`].
    pub fn normalize(value: &Value) -> Self {
        let level = match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) if f > 0.0 => integer_prefix(&number_text(f)),
                _ => None,
            },
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<f64>() {
                    Ok(f) if f > 0.0 => integer_prefix(trimmed),
                    _ => None,
                }
            }
            _ => None,
        };

        let level = level.map(Self::from_value).unwrap_or_default();
        if level == IsolationLevel::None && !value.is_null() {
            log::debug!("dropping isolation level {value}: no matching level");
        }
        level
    }
}

/// Canonical decimal text of a positive number: plain notation inside
/// `[1e-6, 1e21)`, exponent notation outside it.
fn number_text(f: f64) -> String {
    if (1e-6..1e21).contains(&f) {
        f.to_string()
    } else {
        format!("{f:e}")
    }
}

/// Parse the leading `+?[0-9]+` of `s`.
fn integer_prefix(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate: anything this long is out of range anyway.
    Some(digits[..end].parse::<i64>().unwrap_or(i64::MAX))
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<IsolationLevel> for u8 {
    fn from(level: IsolationLevel) -> Self {
        level.value()
    }
}

impl From<i64> for IsolationLevel {
    fn from(value: i64) -> Self {
        IsolationLevel::from_value(value)
    }
}

/// Parse isolation level from its symbolic name or SQL spelling.
impl std::str::FromStr for IsolationLevel {
    type Err = ParseIsolationLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(IsolationLevel::None),
            "serializable" => Ok(IsolationLevel::Serializable),
            "repeatableread" | "repeatable read" | "repeatable_read" => {
                Ok(IsolationLevel::RepeatableRead)
            }
            "readcommitted" | "read committed" | "read_committed" => {
                Ok(IsolationLevel::ReadCommitted)
            }
            _ => Err(ParseIsolationLevelError(s.to_string())),
        }
    }
}
