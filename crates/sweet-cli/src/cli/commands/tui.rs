//! Storefront TUI command handler.

use anyhow::{Context, Result};
use sweet_core::config::Config;
use sweet_core::credentials::CredentialStore;
use sweet_core::session::SessionStore;
use sweet_tui::runtime::TuiRuntime;

pub async fn run(config: Config) -> Result<()> {
    let _log_guard = crate::logging::init().context("init logging")?;

    let session_store = SessionStore::new(CredentialStore::from_home());
    let runtime = TuiRuntime::new(config, session_store).context("start storefront")?;
    runtime.run().await.context("storefront failed")?;

    Ok(())
}
