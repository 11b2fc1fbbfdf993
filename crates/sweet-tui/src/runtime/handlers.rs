//! Effect handler implementations.
//!
//! Each handler spawns a tokio task that performs the network call and sends
//! the result back through the inbox. Errors become display strings here,
//! so the reducer only ever sees user-facing messages.

use sweet_core::api::{AuthClient, CatalogClient};
use sweet_core::catalog::ItemUpdate;
use sweet_core::config::Config;
use sweet_core::session::Role;

use super::inbox::UiEventSender;
use crate::common::{RequestId, TaskId};
use crate::events::{AuthUiEvent, CatalogUiEvent, LoginOutcome, UiEvent};

pub fn spawn_search(
    tx: UiEventSender,
    config: Config,
    token: String,
    request: RequestId,
    term: String,
) {
    tokio::spawn(async move {
        let client = CatalogClient::new(&config, &token);
        let result = client.list(&term).await.map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Catalog(CatalogUiEvent::SearchDone {
            request,
            result,
        }));
    });
}

pub fn spawn_purchase(
    tx: UiEventSender,
    config: Config,
    token: String,
    item_id: u64,
    item_name: String,
) {
    tokio::spawn(async move {
        let client = CatalogClient::new(&config, &token);
        let result = client.purchase(item_id).await.map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Catalog(CatalogUiEvent::PurchaseDone {
            item_id,
            item_name,
            result,
        }));
    });
}

pub fn spawn_login(
    tx: UiEventSender,
    config: Config,
    task: TaskId,
    username: String,
    password: String,
) {
    tokio::spawn(async move {
        let client = AuthClient::new(&config);
        let result = client
            .login(&username, &password)
            .await
            .map(|grant| LoginOutcome {
                role: grant.role,
                token: grant.access_token,
            })
            .map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Auth(AuthUiEvent::LoginDone {
            task,
            username,
            result,
        }));
    });
}

pub fn spawn_register(
    tx: UiEventSender,
    config: Config,
    task: TaskId,
    username: String,
    password: String,
    role: Role,
) {
    tokio::spawn(async move {
        let client = AuthClient::new(&config);
        let result = client
            .register(&username, &password, role)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Auth(AuthUiEvent::RegisterDone { task, result }));
    });
}

pub fn spawn_admin_list(tx: UiEventSender, config: Config, token: String, request: RequestId) {
    tokio::spawn(async move {
        let client = CatalogClient::new(&config, &token);
        let result = client.list("").await.map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Catalog(CatalogUiEvent::AdminListDone {
            request,
            result,
        }));
    });
}

pub fn spawn_admin_delete(
    tx: UiEventSender,
    config: Config,
    token: String,
    task: TaskId,
    item_id: u64,
) {
    tokio::spawn(async move {
        let client = CatalogClient::new(&config, &token);
        let result = client.delete(item_id).await.map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Catalog(CatalogUiEvent::AdminDeleteDone {
            task,
            item_id,
            result,
        }));
    });
}

pub fn spawn_admin_restock(
    tx: UiEventSender,
    config: Config,
    token: String,
    task: TaskId,
    item_id: u64,
    quantity: u32,
) {
    tokio::spawn(async move {
        let client = CatalogClient::new(&config, &token);
        let result = client
            .update(item_id, &ItemUpdate::quantity(quantity))
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(UiEvent::Catalog(CatalogUiEvent::AdminRestockDone {
            task,
            item_id,
            quantity,
            result,
        }));
    });
}
