//! Attendee identity and roster records.

use serde::{Deserialize, Serialize};

use crate::domain::badge_code::BadgeCode;

/// The three form fields that together identify one attendee.
///
/// Matching is exact: no trimming, no case folding. Empty strings are
/// legitimate field values and take part in matching like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Attendee name as typed into the form.
    pub name: String,
    /// Affiliation (company, school, team) as typed.
    pub affiliation: String,
    /// Position or title as typed.
    pub position: String,
}

impl Identity {
    /// Creates an identity from the three form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        affiliation: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.into(),
            position: position.into(),
        }
    }
}

/// One row of the roster: an identity plus its assigned code.
///
/// Field order matches the on-disk column order, so the struct can be
/// (de)serialized straight into the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Attendee name.
    pub name: String,
    /// Attendee affiliation.
    pub affiliation: String,
    /// Attendee position or title.
    pub position: String,
    /// Assigned registration code.
    pub code: BadgeCode,
    /// `Yes`/`No` flag recorded at registration time.
    #[serde(with = "yes_no")]
    pub preregistered: bool,
}

impl ParticipantRecord {
    /// Builds a record for a freshly registered attendee.
    ///
    /// The stored flag is derived from the code prefix so the two can
    /// never disagree on a row this process writes.
    #[must_use]
    pub fn new(identity: Identity, code: BadgeCode) -> Self {
        Self {
            name: identity.name,
            affiliation: identity.affiliation,
            position: identity.position,
            code,
            preregistered: code.prefix().is_preregistered(),
        }
    }

    /// Whether this record belongs to the given identity.
    ///
    /// All three fields must be equal exactly.
    #[must_use]
    pub fn matches(&self, identity: &Identity) -> bool {
        self.name == identity.name
            && self.affiliation == identity.affiliation
            && self.position == identity.position
    }
}

/// Serde adapter for the `Yes`/`No` column in the roster file.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"Yes\" or \"No\", got {other:?}"
            ))),
        }
    }
}
