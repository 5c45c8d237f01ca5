//! Registration service: resolves an identity to its badge code.

use tokio::sync::Mutex;

use crate::domain::{BadgeCode, CodePrefix, Identity, ParticipantRecord, Roster};
use crate::error::CheckinError;
use crate::persistence::RosterStore;

/// Outcome of resolving an identity against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identity was already on the roster; nothing was written.
    Existing(ParticipantRecord),
    /// The identity was unknown and has just been appended.
    Registered(ParticipantRecord),
}

impl Resolution {
    /// The matched or newly created record.
    #[must_use]
    pub const fn record(&self) -> &ParticipantRecord {
        match self {
            Self::Existing(record) | Self::Registered(record) => record,
        }
    }

    /// The badge code of the resolved record.
    #[must_use]
    pub const fn code(&self) -> BadgeCode {
        self.record().code
    }

    /// Whether this resolution created a new row.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}

/// Core check-in workflow over a [`RosterStore`].
///
/// Every resolution runs the full load-match-append-save cycle under one
/// process-wide lock, so concurrent submissions serialize and the
/// count-based sequence numbers stay collision-free.
#[derive(Debug)]
pub struct RegistrationService {
    store: RosterStore,
    checkin_lock: Mutex<()>,
}

impl RegistrationService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: RosterStore) -> Self {
        Self {
            store,
            checkin_lock: Mutex::new(()),
        }
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Resolves an identity to its registration code.
    ///
    /// If a record with the same name, affiliation, and position exists,
    /// it is returned unchanged and the `preregistered` argument is
    /// ignored. Otherwise a new record is appended, its prefix chosen by
    /// the flag, and the updated roster is written back before the
    /// result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::Storage`] if the roster cannot be loaded
    /// or saved.
    pub async fn resolve(
        &self,
        identity: &Identity,
        preregistered: bool,
    ) -> Result<Resolution, CheckinError> {
        let _guard = self.checkin_lock.lock().await;

        let mut roster = Roster::from_records(self.store.load().await?);
        if let Some(record) = roster.find(identity) {
            return Ok(Resolution::Existing(record.clone()));
        }

        let prefix = CodePrefix::from_preregistered(preregistered);
        let record = roster.register(identity.clone(), prefix);
        self.store.save(roster.records()).await?;
        tracing::info!(code = %record.code, preregistered, "participant registered");
        Ok(Resolution::Registered(record))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::ParticipantRecord;

    fn service(dir: &tempfile::TempDir) -> RegistrationService {
        RegistrationService::new(RosterStore::new(dir.path().join("participants.csv")))
    }

    #[tokio::test]
    async fn resolve_registers_unknown_identity() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let service = service(&dir);

        let identity = Identity::new("Kim", "Acme", "Engineer");
        let Ok(resolution) = service.resolve(&identity, true).await else {
            panic!("resolve failed");
        };
        assert!(resolution.is_new());
        assert_eq!(resolution.code().to_string(), "Y_1");

        let Ok(walk_in) = service
            .resolve(&Identity::new("Lee", "Acme", "Engineer"), false)
            .await
        else {
            panic!("resolve failed");
        };
        assert_eq!(walk_in.code().to_string(), "N_1");
    }

    #[tokio::test]
    async fn resolve_is_idempotent_for_known_identity() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let service = service(&dir);
        let identity = Identity::new("Kim", "Acme", "Engineer");

        let Ok(first) = service.resolve(&identity, false).await else {
            panic!("resolve failed");
        };
        let Ok(second) = service.resolve(&identity, false).await else {
            panic!("resolve failed");
        };

        assert!(first.is_new());
        assert!(!second.is_new());
        assert_eq!(first.code(), second.code());

        let Ok(records) = service.store().load().await else {
            panic!("load failed");
        };
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn resolve_finds_seeded_record_without_writing() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let store = RosterStore::new(dir.path().join("participants.csv"));
        let seeded = vec![ParticipantRecord::new(
            Identity::new("Kim", "Acme", "Engineer"),
            BadgeCode::new(CodePrefix::Preregistered, 1),
        )];
        let Ok(()) = store.save(&seeded).await else {
            panic!("seed failed");
        };

        let service = RegistrationService::new(store);
        let Ok(resolution) = service
            .resolve(&Identity::new("Kim", "Acme", "Engineer"), false)
            .await
        else {
            panic!("resolve failed");
        };

        assert!(!resolution.is_new());
        assert_eq!(resolution.code().to_string(), "Y_1");

        let Ok(records) = service.store().load().await else {
            panic!("load failed");
        };
        assert_eq!(records, seeded);
    }

    #[tokio::test]
    async fn walk_ins_append_in_arrival_order() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let service = service(&dir);

        for (name, flag) in [("Kim", true), ("Lee", false), ("Park", false)] {
            let Ok(_) = service
                .resolve(&Identity::new(name, "Acme", "Engineer"), flag)
                .await
            else {
                panic!("resolve failed");
            };
        }

        let Ok(records) = service.store().load().await else {
            panic!("load failed");
        };
        let summary: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.name.clone(), r.code.to_string()))
            .collect();
        assert_eq!(
            summary,
            [
                ("Kim".to_string(), "Y_1".to_string()),
                ("Lee".to_string(), "N_1".to_string()),
                ("Park".to_string(), "N_2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_identity_fields_are_accepted() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let service = service(&dir);

        let identity = Identity::new("", "", "");
        let Ok(first) = service.resolve(&identity, false).await else {
            panic!("resolve failed");
        };
        let Ok(second) = service.resolve(&identity, false).await else {
            panic!("resolve failed");
        };
        assert!(first.is_new());
        assert!(!second.is_new());
        assert_eq!(first.code(), second.code());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        // A directory at the roster path makes every read fail.
        let service = RegistrationService::new(RosterStore::new(dir.path().to_path_buf()));

        let result = service
            .resolve(&Identity::new("Kim", "Acme", "Engineer"), false)
            .await;
        assert!(matches!(result, Err(CheckinError::Storage(_))));
    }
}
