//! Core library for the Sweet Shop terminal client.
//!
//! Everything that is not rendering lives here: configuration, credential
//! persistence, the session store, and the typed REST clients for the remote
//! shop API. The remote API stays the authority for all business logic
//! (inventory, pricing, authentication, stock decrement); this crate only
//! manages client-side state and HTTP calls.

pub mod api;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod session;
