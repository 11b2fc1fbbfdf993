//! Login form state.

use sweet_core::session::Role;

/// Which variant of the form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

/// Focused form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    /// Register mode only.
    Role,
}

/// Login/registration form state.
#[derive(Debug, Default)]
pub struct LoginState {
    pub mode: LoginMode,
    pub username: String,
    pub password: String,
    /// Account type selector, register mode only.
    pub role: Option<Role>,
    pub focus: LoginField,
    /// Last auth failure, shown under the form.
    pub error: Option<String>,
    /// Informational message (e.g. after a successful registration).
    pub notice: Option<String>,
}

impl LoginState {
    /// Role that will be sent on registration.
    pub fn role_or_default(&self) -> Role {
        self.role.unwrap_or(Role::User)
    }

    /// Flips between sign-in and register, resetting transient messages.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        };
        self.focus = LoginField::Username;
        self.error = None;
        self.notice = None;
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (LoginField::Username, _) => LoginField::Password,
            (LoginField::Password, LoginMode::Register) => LoginField::Role,
            (LoginField::Password, LoginMode::SignIn) | (LoginField::Role, _) => {
                LoginField::Username
            }
        };
    }

    /// Clears the password (kept after a failure would be surprising).
    pub fn reset_after_failure(&mut self, error: String) {
        self.error = Some(error);
        self.password.clear();
        self.focus = LoginField::Password;
    }

    /// Switches back to sign-in after a successful registration.
    ///
    /// Registration does not log in; the source flow asks the user to sign
    /// in with the new account.
    pub fn after_registration(&mut self) {
        self.mode = LoginMode::SignIn;
        self.password.clear();
        self.focus = LoginField::Password;
        self.error = None;
        self.notice = Some("Registered successfully! Please sign in.".to_string());
    }
}
