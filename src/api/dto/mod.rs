//! Data Transfer Objects for the web form endpoints.

pub mod checkin_dto;

pub use checkin_dto::CheckinForm;
