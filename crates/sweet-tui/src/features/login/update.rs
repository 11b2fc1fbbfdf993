//! Login form key handling.

use crossterm::event::{KeyCode, KeyEvent};
use sweet_core::session::Role;

use super::state::{LoginField, LoginMode, LoginState};

/// A validated form submission, ready to be turned into an effect by the
/// reducer (which owns the task plumbing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginSubmit {
    SignIn {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
        role: Role,
    },
}

/// Handles a key event on the login form.
///
/// Returns a submission when Enter is pressed on a complete form; both
/// fields are required, mirroring the source form's `required` inputs.
pub fn handle_key(login: &mut LoginState, key: KeyEvent) -> Option<LoginSubmit> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            login.focus_next();
            None
        }
        KeyCode::Char(c) => {
            match login.focus {
                LoginField::Username => login.username.push(c),
                LoginField::Password => login.password.push(c),
                // Space (or any key) flips the account type selector.
                LoginField::Role => {
                    login.role = Some(match login.role_or_default() {
                        Role::User => Role::Admin,
                        Role::Admin => Role::User,
                    });
                }
            }
            None
        }
        KeyCode::Backspace => {
            match login.focus {
                LoginField::Username => {
                    login.username.pop();
                }
                LoginField::Password => {
                    login.password.pop();
                }
                LoginField::Role => {}
            }
            None
        }
        KeyCode::Enter => {
            if login.username.is_empty() || login.password.is_empty() {
                login.error = Some("Username and password are required".to_string());
                return None;
            }
            login.error = None;
            Some(match login.mode {
                LoginMode::SignIn => LoginSubmit::SignIn {
                    username: login.username.clone(),
                    password: login.password.clone(),
                },
                LoginMode::Register => LoginSubmit::Register {
                    username: login.username.clone(),
                    password: login.password.clone(),
                    role: login.role_or_default(),
                },
            })
        }
        _ => None,
    }
}
