//! Feature slices for the TUI (state/update/render per slice).

pub mod admin;
pub mod cart;
pub mod dashboard;
pub mod login;
