//! Log level definitions
//!
//! A [`Level`] is a plain numeric severity. The five canonical levels sit on
//! fixed anchors so that callers can define their own levels in the gaps;
//! only the canonical ones have a [`LevelName`].

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    pub const DEBUG: Level = Level(0);
    pub const INFO: Level = Level(1000);
    pub const WARNING: Level = Level(2000);
    pub const ERROR: Level = Level(3000);
    pub const CRITICAL: Level = Level(9001);

    /// Canonical levels in ascending severity
    pub const ALL: [Level; 5] = [
        Level::DEBUG,
        Level::INFO,
        Level::WARNING,
        Level::ERROR,
        Level::CRITICAL,
    ];

    pub const fn new(value: u32) -> Self {
        Level(value)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn equal_or_greater_than(&self, other: Level) -> bool {
        self.0 >= other.0
    }

    /// Canonical name of this level
    ///
    /// Fails with [`LoggerError::UnknownLevel`] for values outside the
    /// canonical enumeration.
    pub fn name(&self) -> Result<LevelName> {
        match *self {
            Level::DEBUG => Ok(LevelName::DEBUG),
            Level::INFO => Ok(LevelName::INFO),
            Level::WARNING => Ok(LevelName::WARNING),
            Level::ERROR => Ok(LevelName::ERROR),
            Level::CRITICAL => Ok(LevelName::CRITICAL),
            Level(other) => Err(LoggerError::UnknownLevel(other)),
        }
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => write!(f, "{}", name),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        LevelName::from(s.to_string()).level()
    }
}

/// Stable ascending sort by severity
pub fn sort_levels(levels: &mut [Level]) {
    levels.sort();
}

/// Canonical lowercase name of a level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelName(Cow<'static, str>);

impl LevelName {
    pub const DEBUG: LevelName = LevelName(Cow::Borrowed("debug"));
    pub const INFO: LevelName = LevelName(Cow::Borrowed("info"));
    pub const WARNING: LevelName = LevelName(Cow::Borrowed("warning"));
    pub const ERROR: LevelName = LevelName(Cow::Borrowed("error"));
    pub const CRITICAL: LevelName = LevelName(Cow::Borrowed("critical"));

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric level for this name
    ///
    /// Matching is exact; fails with [`LoggerError::UnknownLevelName`] for
    /// anything outside the canonical enumeration.
    pub fn level(&self) -> Result<Level> {
        match self.as_str() {
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warning" => Ok(Level::WARNING),
            "error" => Ok(Level::ERROR),
            "critical" => Ok(Level::CRITICAL),
            other => Err(LoggerError::UnknownLevelName(other.to_string())),
        }
    }
}

impl From<String> for LevelName {
    fn from(s: String) -> Self {
        LevelName(Cow::Owned(s))
    }
}

impl From<&'static str> for LevelName {
    fn from(s: &'static str) -> Self {
        LevelName(Cow::Borrowed(s))
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
