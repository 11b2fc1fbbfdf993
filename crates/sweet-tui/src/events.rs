//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.

use crossterm::event::Event as CrosstermEvent;
use sweet_core::catalog::CatalogItem;
use sweet_core::session::Role;

use crate::common::{RequestId, TaskId};

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives feedback expiry.
    Tick,
    /// Raw terminal input.
    Terminal(CrosstermEvent),
    /// Async auth results.
    Auth(AuthUiEvent),
    /// Async catalog results.
    Catalog(CatalogUiEvent),
}

#[derive(Debug)]
pub enum AuthUiEvent {
    /// Login exchange finished.
    LoginDone {
        task: TaskId,
        username: String,
        result: Result<LoginOutcome, String>,
    },
    /// Registration finished.
    RegisterDone {
        task: TaskId,
        result: Result<(), String>,
    },
}

/// Successful login payload carried back to the reducer.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub role: Role,
    pub token: String,
}

#[derive(Debug)]
pub enum CatalogUiEvent {
    /// A search response arrived (dashboard view-model).
    SearchDone {
        request: RequestId,
        result: Result<Vec<CatalogItem>, String>,
    },
    /// A purchase command finished.
    PurchaseDone {
        item_id: u64,
        item_name: String,
        result: Result<(), String>,
    },
    /// Admin list refresh finished.
    AdminListDone {
        request: RequestId,
        result: Result<Vec<CatalogItem>, String>,
    },
    /// Admin delete finished.
    AdminDeleteDone {
        task: TaskId,
        item_id: u64,
        result: Result<(), String>,
    },
    /// Admin restock finished.
    AdminRestockDone {
        task: TaskId,
        item_id: u64,
        quantity: u32,
        result: Result<(), String>,
    },
}
