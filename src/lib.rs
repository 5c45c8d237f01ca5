//! # qr-checkin
//!
//! Self-service QR check-in desk for single-event attendee rosters.
//!
//! Attendees scan one printed QR code, land on a web form, and enter
//! name, affiliation, and position. Anyone already on the roster is
//! shown their pre-assigned badge code; anyone else is appended as a
//! walk-in and numbered on the spot. The roster lives in a plain CSV
//! file that staff open directly in a spreadsheet.
//!
//! ## Architecture
//!
//! ```text
//! Attendee browser (via printed QR)
//!     │
//!     ├── Page + form handlers (api/)
//!     │
//!     ├── RegistrationService (service/)
//!     │
//!     ├── Roster / BadgeCode (domain/)
//!     │
//!     └── CSV roster file (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod qr;
pub mod service;
