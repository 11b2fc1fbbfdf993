//! Login feature slice: sign-in and registration form.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginMode, LoginState};
pub use update::{LoginSubmit, handle_key};
