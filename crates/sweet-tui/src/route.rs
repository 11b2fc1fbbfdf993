//! Route guard.
//!
//! A pure decision function mapping (requested route, current session) to a
//! render/redirect outcome. It is re-evaluated on every navigation and on
//! every session change, so a login or logout takes effect immediately.

use sweet_core::session::{Role, Session};

/// The four logical routes of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
    Cart,
    Admin,
}

impl Route {
    /// Title shown in the navbar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Login => "Sign in",
            Route::Cart => "Cart",
            Route::Admin => "Admin",
        }
    }
}

/// Outcome of a route decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    RedirectToLogin,
    RedirectToHome,
}

/// Decides whether `route` may render for `session`.
///
/// Policy:
/// - dashboard, cart: require a session, otherwise redirect to login
/// - login: always renders, even for an authenticated session
/// - admin: requires an admin session, otherwise redirect to home
pub fn resolve(route: Route, session: Option<&Session>) -> RouteDecision {
    match route {
        Route::Login => RouteDecision::Render(Route::Login),
        Route::Dashboard | Route::Cart => {
            if session.is_some() {
                RouteDecision::Render(route)
            } else {
                RouteDecision::RedirectToLogin
            }
        }
        Route::Admin => match session {
            Some(s) if s.role == Role::Admin => RouteDecision::Render(Route::Admin),
            _ => RouteDecision::RedirectToHome,
        },
    }
}

/// Applies a decision, following redirects to their target route.
pub fn target(route: Route, session: Option<&Session>) -> Route {
    match resolve(route, session) {
        RouteDecision::Render(r) => r,
        RouteDecision::RedirectToLogin => Route::Login,
        // A redirect to home can itself bounce to login when anonymous.
        RouteDecision::RedirectToHome => match resolve(Route::Dashboard, session) {
            RouteDecision::Render(r) => r,
            _ => Route::Login,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Session {
        Session {
            role: Role::User,
            username: "bob".to_string(),
        }
    }

    fn admin() -> Session {
        Session {
            role: Role::Admin,
            username: "alice".to_string(),
        }
    }

    #[test]
    fn guarded_routes_redirect_anonymous_to_login() {
        assert_eq!(
            resolve(Route::Dashboard, None),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(resolve(Route::Cart, None), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn guarded_routes_render_for_any_session() {
        assert_eq!(
            resolve(Route::Dashboard, Some(&user())),
            RouteDecision::Render(Route::Dashboard)
        );
        assert_eq!(
            resolve(Route::Cart, Some(&admin())),
            RouteDecision::Render(Route::Cart)
        );
    }

    #[test]
    fn login_always_renders_even_when_authenticated() {
        assert_eq!(
            resolve(Route::Login, None),
            RouteDecision::Render(Route::Login)
        );
        assert_eq!(
            resolve(Route::Login, Some(&admin())),
            RouteDecision::Render(Route::Login)
        );
    }

    #[test]
    fn admin_route_is_role_gated() {
        assert_eq!(resolve(Route::Admin, None), RouteDecision::RedirectToHome);
        assert_eq!(
            resolve(Route::Admin, Some(&user())),
            RouteDecision::RedirectToHome
        );
        assert_eq!(
            resolve(Route::Admin, Some(&admin())),
            RouteDecision::Render(Route::Admin)
        );
    }

    #[test]
    fn admin_redirect_for_anonymous_lands_on_login() {
        // Home itself is guarded, so the redirect chain ends at login.
        assert_eq!(target(Route::Admin, None), Route::Login);
        assert_eq!(target(Route::Admin, Some(&user())), Route::Dashboard);
        assert_eq!(target(Route::Admin, Some(&admin())), Route::Admin);
    }
}
