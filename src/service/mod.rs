//! Service layer: business logic orchestration.
//!
//! [`RegistrationService`] runs the check-in workflow: load the roster,
//! match the submitted identity, register walk-ins, and write the file
//! back, all under one lock.

pub mod registration;

pub use registration::{RegistrationService, Resolution};
