//! Typed clients for the shop REST API.

mod auth;
mod error;
mod sweets;

pub use auth::{AuthClient, LoginGrant};
pub use error::{ApiError, ApiErrorKind};
pub use sweets::CatalogClient;
