//! Typed registration codes.
//!
//! [`BadgeCode`] is the `<prefix>_<sequence>` identifier printed on an
//! attendee badge, e.g. `Y_12`. [`CodePrefix`] distinguishes pre-registered
//! attendees from on-site walk-ins and forms the first half of the code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Origin marker forming the first half of a [`BadgeCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePrefix {
    /// Attendee was on the roster before the event (`"Y"`).
    Preregistered,
    /// Attendee registered at the door (`"N"`).
    WalkIn,
}

impl CodePrefix {
    /// Selects the prefix for a first-time registration.
    #[must_use]
    pub const fn from_preregistered(preregistered: bool) -> Self {
        if preregistered {
            Self::Preregistered
        } else {
            Self::WalkIn
        }
    }

    /// Single-letter marker as it appears in the roster file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preregistered => "Y",
            Self::WalkIn => "N",
        }
    }

    /// Whether this prefix marks a pre-registered attendee.
    #[must_use]
    pub const fn is_preregistered(self) -> bool {
        matches!(self, Self::Preregistered)
    }
}

impl fmt::Display for CodePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration code of the form `<prefix>_<sequence>`.
///
/// The sequence is a 1-based counter scoped to the prefix. It is derived
/// from the record set at insertion time and never reassigned; the store
/// supports no deletion, so sequences are never reused either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeCode {
    prefix: CodePrefix,
    sequence: u32,
}

impl BadgeCode {
    /// Creates a code from its parts.
    #[must_use]
    pub const fn new(prefix: CodePrefix, sequence: u32) -> Self {
        Self { prefix, sequence }
    }

    /// The origin prefix.
    #[must_use]
    pub const fn prefix(self) -> CodePrefix {
        self.prefix
    }

    /// The 1-based per-prefix ordinal.
    #[must_use]
    pub const fn sequence(self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for BadgeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.sequence)
    }
}

/// Error returned when parsing a malformed badge code.
#[derive(Debug, thiserror::Error)]
#[error("malformed badge code: {0:?}")]
pub struct ParseBadgeCodeError(String);

impl FromStr for BadgeCode {
    type Err = ParseBadgeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBadgeCodeError(s.to_string());
        let (prefix, sequence) = s.split_once('_').ok_or_else(err)?;
        let prefix = match prefix {
            "Y" => CodePrefix::Preregistered,
            "N" => CodePrefix::WalkIn,
            _ => return Err(err()),
        };
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let sequence = sequence.parse().map_err(|_| err())?;
        Ok(Self { prefix, sequence })
    }
}

// Stored in the roster file as the rendered string.
impl Serialize for BadgeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BadgeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
