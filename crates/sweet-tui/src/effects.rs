//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations). This
//! keeps the reducer pure: it only mutates state and returns effects, never
//! performs I/O or spawns tasks directly.

use sweet_core::session::Role;

use crate::common::{RequestId, TaskId};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn a catalog search scoped by `term` (empty = unscoped listing).
    SpawnSearch { request: RequestId, term: String },

    /// Spawn a purchase command for one unit of an item.
    ///
    /// Purchases carry no request id: each one is independent and is never
    /// superseded by a newer one.
    SpawnPurchase { item_id: u64, item_name: String },

    /// Spawn the login exchange.
    SpawnLogin {
        task: TaskId,
        username: String,
        password: String,
    },

    /// Spawn a registration request.
    SpawnRegister {
        task: TaskId,
        username: String,
        password: String,
        role: Role,
    },

    /// Persist the established session to the credential store.
    PersistSession {
        role: Role,
        username: String,
        token: String,
    },

    /// Clear the persisted session (logout).
    ClearSession,

    /// Spawn an admin catalog listing.
    SpawnAdminList { request: RequestId },

    /// Spawn an admin delete for an item.
    SpawnAdminDelete { task: TaskId, item_id: u64 },

    /// Spawn an admin restock (quantity update) for an item.
    SpawnAdminRestock {
        task: TaskId,
        item_id: u64,
        quantity: u32,
    },
}
