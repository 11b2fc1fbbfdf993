//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: SessionState     (loading / anonymous / authenticated)
//! ├── route: Route              (current view, always guard-approved)
//! ├── dashboard: DashboardState (catalog view-model)
//! ├── login: LoginState         (sign-in / register form)
//! ├── admin: AdminState         (admin panel)
//! ├── task_seq: TaskSeq         (async task id generator)
//! └── tasks: Tasks              (task lifecycle state)
//! ```
//!
//! The session is the only state shared across views; everything else is
//! per-feature. The stored `route` is always the output of the route guard:
//! navigation goes through [`AppState::navigate`], never by assigning the
//! field directly.

use sweet_core::session::SessionState;

use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::admin::AdminState;
use crate::features::dashboard::DashboardState;
use crate::features::login::LoginState;
use crate::route::{self, Route};

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Session lifecycle state, mirrored from the session store.
    pub session: SessionState,
    /// Current route; invariant: approved by the guard for `session`.
    pub route: Route,
    pub dashboard: DashboardState,
    pub login: LoginState,
    pub admin: AdminState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
}

impl AppState {
    /// Creates the state for an already-hydrated session.
    ///
    /// The initial route is the guard's answer for "home": dashboard when
    /// signed in, login otherwise.
    pub fn new(session: SessionState) -> (Self, Vec<UiEffect>) {
        let mut state = Self {
            should_quit: false,
            route: Route::Login,
            session,
            dashboard: DashboardState::default(),
            login: LoginState::default(),
            admin: AdminState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
        };
        let effects = state.navigate(Route::Dashboard);
        (state, effects)
    }

    /// Navigates to `requested`, following guard redirects.
    ///
    /// Entering the dashboard or admin view triggers its initial load (the
    /// source pages fetched on mount).
    pub fn navigate(&mut self, requested: Route) -> Vec<UiEffect> {
        let target = route::target(requested, self.session.session());
        self.route = target;
        match target {
            Route::Dashboard => vec![self.dashboard.begin_search()],
            Route::Admin => vec![UiEffect::SpawnAdminList {
                request: self.admin.begin_refresh(),
            }],
            Route::Login | Route::Cart => vec![],
        }
    }

    /// Re-runs the guard for the current route after a session change
    /// (login, logout), applying any redirect immediately.
    pub fn reresolve_route(&mut self) -> Vec<UiEffect> {
        self.navigate(self.route)
    }
}
