//! Domain layer: badge codes, participant records, and the roster.
//!
//! This module contains the core check-in model: the typed registration
//! code, the identity triple submitted through the form, the roster row
//! it resolves to, and the in-memory roster with its per-prefix
//! numbering rules.

pub mod badge_code;
pub mod participant;
pub mod roster;

pub use badge_code::{BadgeCode, CodePrefix, ParseBadgeCodeError};
pub use participant::{Identity, ParticipantRecord};
pub use roster::Roster;
