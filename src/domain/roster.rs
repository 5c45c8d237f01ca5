//! In-memory working copy of the attendee roster.

use crate::domain::badge_code::{BadgeCode, CodePrefix};
use crate::domain::participant::{Identity, ParticipantRecord};

/// Ordered collection of participant records.
///
/// The roster is loaded from the store, queried or extended, and written
/// back in full. Append is the only mutation; insertion order is the
/// on-disk row order and is preserved across save/load cycles.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<ParticipantRecord>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wraps records loaded from the store.
    #[must_use]
    pub const fn from_records(records: Vec<ParticipantRecord>) -> Self {
        Self { records }
    }

    /// Finds the first record matching the identity, if any.
    #[must_use]
    pub fn find(&self, identity: &Identity) -> Option<&ParticipantRecord> {
        self.records.iter().find(|record| record.matches(identity))
    }

    /// Next sequence number for the given prefix.
    ///
    /// Sequences are 1-based and scoped per prefix: the next `Y` code is
    /// one past the count of existing `Y` records, independent of how
    /// many `N` records exist.
    #[must_use]
    pub fn next_sequence(&self, prefix: CodePrefix) -> u32 {
        let count = self
            .records
            .iter()
            .filter(|record| record.code.prefix() == prefix)
            .count();
        count as u32 + 1
    }

    /// Appends a new record for the identity and returns a copy of it.
    pub fn register(&mut self, identity: Identity, prefix: CodePrefix) -> ParticipantRecord {
        let code = BadgeCode::new(prefix, self.next_sequence(prefix));
        let record = ParticipantRecord::new(identity, code);
        self.records.push(record.clone());
        record
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ParticipantRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
