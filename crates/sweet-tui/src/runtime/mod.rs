//! TUI runtime - owns terminal and session store, runs the event loop,
//! executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Handlers send `UiEvent`s directly to `inbox_tx`; the runtime drains
//! `inbox_rx` each frame. This keeps async result collection in one place
//! with no per-operation receivers.

mod handlers;
mod inbox;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sweet_core::config::Config;
use sweet_core::session::SessionStore;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Cadence of tick events; drives the purchase-banner expiry sweep.
const TICK_DURATION: Duration = Duration::from_millis(250);

/// How long each loop iteration waits for terminal input.
const POLL_DURATION: Duration = Duration::from_millis(50);

/// Full-screen TUI runtime.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    config: Config,
    /// Process-wide session store; hydrated once in `new`, written on
    /// establish/clear effects.
    session_store: SessionStore,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    /// Effects produced before the loop started (initial route load).
    startup_effects: Vec<UiEffect>,
}

impl TuiRuntime {
    /// Creates the runtime.
    ///
    /// Hydration happens here, before the first route decision, so the app
    /// never renders a guarded view for a session that turns out absent.
    pub fn new(config: Config, mut session_store: SessionStore) -> Result<Self> {
        session_store.hydrate()?;
        let (state, startup_effects) = AppState::new(session_store.state().clone());

        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            config,
            session_store,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
            startup_effects,
        })
    }

    /// Runs the event loop until the reducer asks to quit.
    pub async fn run(mut self) -> Result<()> {
        let startup = std::mem::take(&mut self.startup_effects);
        for effect in startup {
            self.execute(effect);
        }

        loop {
            self.terminal.draw(|frame| render::view(frame, &self.state))?;

            while let Ok(event) = self.inbox_rx.try_recv() {
                self.dispatch(event);
            }
            if self.state.should_quit {
                break;
            }

            if self.last_tick.elapsed() >= TICK_DURATION {
                self.last_tick = Instant::now();
                self.dispatch(UiEvent::Tick);
            }

            if event::poll(POLL_DURATION)? {
                let term_event = event::read()?;
                self.dispatch(UiEvent::Terminal(term_event));
            }
        }

        terminal::restore_terminal()?;
        Ok(())
    }

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute(effect);
        }
    }

    /// Bearer token for authenticated requests, from the live session.
    fn token(&self) -> Option<String> {
        self.state.session.token().map(str::to_string)
    }

    fn execute(&mut self, effect: UiEffect) {
        let tx = self.inbox_tx.clone();
        let config = self.config.clone();
        match effect {
            UiEffect::Quit => {}

            UiEffect::SpawnSearch { request, term } => {
                let Some(token) = self.token() else {
                    tracing::warn!("search effect without a session, dropping");
                    return;
                };
                handlers::spawn_search(tx, config, token, request, term);
            }
            UiEffect::SpawnPurchase { item_id, item_name } => {
                let Some(token) = self.token() else {
                    return;
                };
                handlers::spawn_purchase(tx, config, token, item_id, item_name);
            }
            UiEffect::SpawnLogin {
                task,
                username,
                password,
            } => {
                handlers::spawn_login(tx, config, task, username, password);
            }
            UiEffect::SpawnRegister {
                task,
                username,
                password,
                role,
            } => {
                handlers::spawn_register(tx, config, task, username, password, role);
            }

            UiEffect::PersistSession {
                role,
                username,
                token,
            } => {
                if let Err(err) = self.session_store.establish(role, &username, &token) {
                    tracing::warn!(%err, "failed to persist session");
                }
            }
            UiEffect::ClearSession => {
                if let Err(err) = self.session_store.clear() {
                    tracing::warn!(%err, "failed to clear persisted session");
                }
            }

            UiEffect::SpawnAdminList { request } => {
                let Some(token) = self.token() else {
                    return;
                };
                handlers::spawn_admin_list(tx, config, token, request);
            }
            UiEffect::SpawnAdminDelete { task, item_id } => {
                let Some(token) = self.token() else {
                    return;
                };
                handlers::spawn_admin_delete(tx, config, token, task, item_id);
            }
            UiEffect::SpawnAdminRestock {
                task,
                item_id,
                quantity,
            } => {
                let Some(token) = self.token() else {
                    return;
                };
                handlers::spawn_admin_restock(tx, config, token, task, item_id, quantity);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
