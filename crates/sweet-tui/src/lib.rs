//! Terminal UI for the Sweet Shop client.
//!
//! The architecture is Elm-shaped:
//! - `events` - everything that can happen (`UiEvent`)
//! - `update` - the pure reducer: mutates `AppState`, returns `UiEffect`s
//! - `effects` - I/O commands the reducer asks for
//! - `runtime` - owns the terminal and the session store, runs the event
//!   loop, executes effects, feeds results back through an inbox channel
//! - `render` - draws the current state, never mutates it
//!
//! The reducer performs no I/O and spawns no tasks; every suspension point
//! in the program is a network call made by a runtime handler.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
