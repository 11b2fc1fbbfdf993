//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state; no I/O happens in this module.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sweet_core::session::{Session, SessionState};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, CatalogUiEvent, UiEvent};
use crate::features::{admin, dashboard, login};
use crate::route::Route;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.dashboard.sweep_feedback(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Auth(auth_event) => handle_auth_event(app, auth_event),
        UiEvent::Catalog(catalog_event) => handle_catalog_event(app, catalog_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // The loading screen only answers to quit.
    if app.session.is_loading() {
        return if is_quit(key) {
            app.should_quit = true;
            vec![UiEffect::Quit]
        } else {
            vec![]
        };
    }

    // Global bindings first; the focused view gets everything else.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                app.should_quit = true;
                return vec![UiEffect::Quit];
            }
            KeyCode::Char('h') => return app.navigate(Route::Dashboard),
            KeyCode::Char('l') => return app.navigate(Route::Login),
            KeyCode::Char('t') => return app.navigate(Route::Cart),
            KeyCode::Char('a') => return app.navigate(Route::Admin),
            KeyCode::Char('o') => return logout(app),
            KeyCode::Char('r') if app.route == Route::Login => {
                app.login.toggle_mode();
                return vec![];
            }
            _ => return vec![],
        }
    }

    match app.route {
        Route::Dashboard => dashboard::handle_key(&mut app.dashboard, key),
        Route::Login => handle_login_key(app, key),
        Route::Cart => vec![],
        Route::Admin => handle_admin_key(app, key),
    }
}

fn is_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

/// Drops the session and re-runs the guard; the current route redirects away
/// immediately, without waiting for anything.
fn logout(app: &mut AppState) -> Vec<UiEffect> {
    app.session = SessionState::Anonymous;
    let mut effects = vec![UiEffect::ClearSession];
    effects.extend(app.reresolve_route());
    effects
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // One auth exchange at a time; keystrokes still edit the form.
    let submit = login::handle_key(&mut app.login, key);
    let Some(submit) = submit else {
        return vec![];
    };

    match submit {
        login::LoginSubmit::SignIn { username, password } => {
            if app.tasks.login.is_running() {
                return vec![];
            }
            let task = app.task_seq.next_id();
            app.tasks.login.start(task);
            vec![UiEffect::SpawnLogin {
                task,
                username,
                password,
            }]
        }
        login::LoginSubmit::Register {
            username,
            password,
            role,
        } => {
            if app.tasks.register.is_running() {
                return vec![];
            }
            let task = app.task_seq.next_id();
            app.tasks.register.start(task);
            vec![UiEffect::SpawnRegister {
                task,
                username,
                password,
                role,
            }]
        }
    }
}

fn handle_admin_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(action) = admin::handle_key(&mut app.admin, key) else {
        return vec![];
    };
    let kind = match action {
        admin::AdminAction::Refresh => TaskKind::AdminRefresh,
        admin::AdminAction::Delete { .. } => TaskKind::AdminDelete,
        admin::AdminAction::Restock { .. } => TaskKind::AdminRestock,
    };
    // Refreshes supersede via request ids; mutations are one at a time.
    if kind != TaskKind::AdminRefresh && app.tasks.state_mut(kind).is_running() {
        return vec![];
    }
    let task = app.task_seq.next_id();
    if kind != TaskKind::AdminRefresh {
        app.tasks.state_mut(kind).start(task);
    }
    vec![admin::action_effect(&mut app.admin, action, task)]
}

fn handle_auth_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::LoginDone {
            task,
            username,
            result,
        } => {
            if !app.tasks.login.finish_if_active(task) {
                return vec![];
            }
            match result {
                Ok(outcome) => {
                    app.session = SessionState::Authenticated {
                        session: Session {
                            role: outcome.role,
                            username: username.clone(),
                        },
                        token: outcome.token.clone(),
                    };
                    app.login.password.clear();
                    app.login.error = None;
                    app.login.notice = None;

                    // Persist first, then land on the dashboard.
                    let mut effects = vec![UiEffect::PersistSession {
                        role: outcome.role,
                        username,
                        token: outcome.token,
                    }];
                    effects.extend(app.navigate(Route::Dashboard));
                    effects
                }
                Err(error) => {
                    app.login.reset_after_failure(error);
                    vec![]
                }
            }
        }
        AuthUiEvent::RegisterDone { task, result } => {
            if !app.tasks.register.finish_if_active(task) {
                return vec![];
            }
            match result {
                Ok(()) => app.login.after_registration(),
                Err(error) => app.login.error = Some(error),
            }
            vec![]
        }
    }
}

fn handle_catalog_event(app: &mut AppState, event: CatalogUiEvent) -> Vec<UiEffect> {
    match event {
        CatalogUiEvent::SearchDone { request, result } => {
            app.dashboard.apply_search(request, result);
        }
        CatalogUiEvent::PurchaseDone {
            item_id,
            item_name,
            result,
        } => {
            app.dashboard
                .apply_purchase(item_id, &item_name, result, Instant::now());
        }
        CatalogUiEvent::AdminListDone { request, result } => {
            app.admin.apply_list(request, result);
        }
        CatalogUiEvent::AdminDeleteDone {
            task,
            item_id,
            result,
        } => {
            app.tasks.admin_delete.finish_if_active(task);
            app.admin.apply_delete(item_id, result);
        }
        CatalogUiEvent::AdminRestockDone {
            task,
            item_id,
            quantity,
            result,
        } => {
            app.tasks.admin_restock.finish_if_active(task);
            app.admin.apply_restock(item_id, quantity, result);
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TaskId;
    use crate::events::LoginOutcome;
    use sweet_core::session::Role;

    fn anonymous_app() -> AppState {
        let (app, _) = AppState::new(SessionState::Anonymous);
        app
    }

    fn signed_in_app(role: Role) -> AppState {
        let (app, _) = AppState::new(SessionState::Authenticated {
            session: Session {
                role,
                username: "alice".to_string(),
            },
            token: "tok-1".to_string(),
        });
        app
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn anonymous_start_lands_on_login() {
        let app = anonymous_app();
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn signed_in_start_lands_on_dashboard_and_loads() {
        let (app, effects) = AppState::new(SessionState::Authenticated {
            session: Session {
                role: Role::User,
                username: "bob".to_string(),
            },
            token: "tok-1".to_string(),
        });
        assert_eq!(app.route, Route::Dashboard);
        assert!(matches!(effects[0], UiEffect::SpawnSearch { .. }));
    }

    #[test]
    fn admin_navigation_redirects_by_role() {
        let mut app = anonymous_app();
        update(&mut app, ctrl('a'));
        assert_eq!(app.route, Route::Login, "anonymous bounces via home to login");

        let mut app = signed_in_app(Role::User);
        update(&mut app, ctrl('a'));
        assert_eq!(app.route, Route::Dashboard, "user is sent home");

        let mut app = signed_in_app(Role::Admin);
        let effects = update(&mut app, ctrl('a'));
        assert_eq!(app.route, Route::Admin);
        assert!(matches!(effects[0], UiEffect::SpawnAdminList { .. }));
    }

    #[test]
    fn logout_clears_credentials_and_redirects() {
        let mut app = signed_in_app(Role::User);
        assert_eq!(app.route, Route::Dashboard);

        let effects = update(&mut app, ctrl('o'));
        assert_eq!(app.session, SessionState::Anonymous);
        assert_eq!(app.route, Route::Login);
        assert_eq!(effects[0], UiEffect::ClearSession);
    }

    #[test]
    fn login_success_establishes_session_and_goes_home() {
        let mut app = anonymous_app();
        app.tasks.login.start(TaskId(7));

        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginDone {
                task: TaskId(7),
                username: "alice".to_string(),
                result: Ok(LoginOutcome {
                    role: Role::Admin,
                    token: "tok-9".to_string(),
                }),
            }),
        );

        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.session.token(), Some("tok-9"));
        assert!(matches!(effects[0], UiEffect::PersistSession { .. }));
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::SpawnSearch { .. })),
            "landing on the dashboard triggers the initial listing"
        );
    }

    #[test]
    fn login_failure_surfaces_the_message_and_stays_put() {
        let mut app = anonymous_app();
        app.tasks.login.start(TaskId(7));

        update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginDone {
                task: TaskId(7),
                username: "alice".to_string(),
                result: Err("Incorrect username or password".to_string()),
            }),
        );

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.session, SessionState::Anonymous);
        assert_eq!(
            app.login.error.as_deref(),
            Some("Incorrect username or password")
        );
    }

    #[test]
    fn stale_login_result_is_ignored() {
        let mut app = anonymous_app();
        // No login task active: a result for task 3 must not establish anything.
        update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginDone {
                task: TaskId(3),
                username: "mallory".to_string(),
                result: Ok(LoginOutcome {
                    role: Role::Admin,
                    token: "tok-x".to_string(),
                }),
            }),
        );
        assert_eq!(app.session, SessionState::Anonymous);
    }

    #[test]
    fn registration_success_flips_back_to_sign_in() {
        let mut app = anonymous_app();
        app.tasks.register.start(TaskId(1));
        update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::RegisterDone {
                task: TaskId(1),
                result: Ok(()),
            }),
        );
        assert_eq!(app.session, SessionState::Anonymous, "register does not log in");
        assert!(app.login.notice.as_deref().unwrap().contains("sign in"));
    }

    #[test]
    fn loading_session_ignores_everything_but_quit() {
        let mut app = AppState {
            session: SessionState::Loading,
            ..anonymous_app()
        };
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            ))),
        );
        assert!(effects.is_empty());

        let effects = update(&mut app, ctrl('q'));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
