//! Persistence layer: CSV roster file.
//!
//! Provides [`RosterStore`], a whole-file reader/writer for the attendee
//! roster. The file doubles as the operator's spreadsheet, so the store
//! keeps it well-formed at all times, header row included.

pub mod csv_store;

pub use csv_store::RosterStore;
