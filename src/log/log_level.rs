use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

use thiserror::Error;

/// A set of severity/category bits.
///
/// `LogLevel` is used both to classify a single log event and as the subscription
/// filter of a routing entry. It is a plain `u32`, so downstream code can mint new
/// levels from unused bits without touching this type:
///
/// ```
/// use routelog::log::log_level::LogLevel;
///
/// const VERBOSE: LogLevel = LogLevel::from_raw(1 << 8);
/// let filter = VERBOSE | LogLevel::WARN;
/// assert!(filter.intersects(VERBOSE));
/// assert!(!filter.intersects(LogLevel::DEBUG));
/// ```
///
/// # Bit layout
///
/// * bits 0..=4: the named built-in levels.
/// * bits 5..=7: reserved for future built-ins.
/// * bits 8..=31: free for user-defined levels.
///
/// [`LogLevel::ALL`] sets every bit, so an `ALL` subscription also receives
/// user-defined levels.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogLevel(u32);

impl LogLevel {
    pub const OFF: Self = Self(0);
    pub const DEBUG: Self = Self(1 << 0);
    pub const INFO: Self = Self(1 << 1);
    pub const EVENT: Self = Self(1 << 2);
    pub const WARN: Self = Self(1 << 3);
    pub const ERROR: Self = Self(1 << 4);
    /// Every bit set: built-in, reserved and user-defined levels alike.
    pub const ALL: Self = Self(u32::MAX);

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Union of both bit sets. `OFF` is the identity.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Routing predicate: true when the two masks share at least one bit.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Human-readable name of the level.
    ///
    /// Only `Off`, `All` and single registered bits have a name; anything else,
    /// including multi-bit combinations, is `"Unknown"`.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::OFF => "Off",
            Self::ALL => "All",
            level if level.0.is_power_of_two() => LEVEL_NAMES
                .iter()
                .find(|(l, _)| *l == level)
                .map_or(UNKNOWN, |(_, name)| *name),
            _ => UNKNOWN,
        }
    }
}

const UNKNOWN: &str = "Unknown";

/// Names of the registered single-bit levels, consulted only by [`LogLevel::describe`]
/// and by the level-expression parser.
static LEVEL_NAMES: &[(LogLevel, &str)] = &[
    (LogLevel::DEBUG, "Debug"),
    (LogLevel::INFO, "Info"),
    (LogLevel::EVENT, "Event"),
    (LogLevel::WARN, "Warn"),
    (LogLevel::ERROR, "Error"),
];

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl BitOr for LogLevel {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl BitOrAssign for LogLevel {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl FromIterator<LogLevel> for LogLevel {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        iter.into_iter().fold(Self::OFF, Self::combine)
    }
}

impl From<u32> for LogLevel {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<LogLevel> for u32 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    #[error("empty level expression")]
    Empty,
    #[error("unknown log level: {0:?}")]
    UnknownName(String),
}

/// Parses a level expression such as `"Info | Warn"`, `"all"` or `"0x300|Error"`.
impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseLevelError::Empty);
        }
        s.split('|').map(parse_term).collect()
    }
}

fn parse_term(term: &str) -> Result<LogLevel, ParseLevelError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(ParseLevelError::Empty);
    }
    if term.eq_ignore_ascii_case("off") {
        return Ok(LogLevel::OFF);
    }
    if term.eq_ignore_ascii_case("all") {
        return Ok(LogLevel::ALL);
    }
    if let Some((level, _)) = LEVEL_NAMES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(term))
    {
        return Ok(*level);
    }

    let raw = match term.strip_prefix("0x").or_else(|| term.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => term.parse::<u32>(),
    };
    raw.map(LogLevel)
        .map_err(|_| ParseLevelError::UnknownName(term.to_string()))
}
