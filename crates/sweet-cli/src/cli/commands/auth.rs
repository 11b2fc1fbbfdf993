//! Login and logout command handlers.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result};
use sweet_core::api::AuthClient;
use sweet_core::config::Config;
use sweet_core::credentials::CredentialStore;
use sweet_core::session::{SessionState, SessionStore};

pub async fn login(config: &Config, username: &str, password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => read_password()?,
    };

    let client = AuthClient::new(config);
    let grant = client
        .login(username, &password)
        .await
        .context("login failed")?;

    let mut store = SessionStore::new(CredentialStore::from_home());
    store
        .establish(grant.role, username, &grant.access_token)
        .context("persist session")?;

    println!("Logged in to Sweet Shop as {username} ({})", grant.role);
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut store = SessionStore::new(CredentialStore::from_home());
    store.hydrate().context("read stored session")?;

    match store.state() {
        SessionState::Authenticated { .. } => {
            store.clear().context("clear session")?;
            println!("Logged out from Sweet Shop");
        }
        _ => println!("Not logged in to Sweet Shop"),
    }
    Ok(())
}

fn read_password() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No password provided; pass --password or pipe it via stdin");
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("read password")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("No password provided via pipe");
    }
    Ok(password)
}
