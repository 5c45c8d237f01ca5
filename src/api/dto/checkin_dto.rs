//! Check-in form payload.

use serde::Deserialize;

use crate::domain::Identity;

/// Fields posted by the check-in form.
///
/// All three fields must be present in the submission; empty values are
/// accepted and matched verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinForm {
    /// Attendee name.
    pub name: String,
    /// Attendee affiliation.
    pub affiliation: String,
    /// Attendee position or title.
    pub position: String,
}

impl CheckinForm {
    /// Converts the form into the domain identity triple.
    #[must_use]
    pub fn into_identity(self) -> Identity {
        Identity::new(self.name, self.affiliation, self.position)
    }
}
