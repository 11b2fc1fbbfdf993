//! Top-level view: navbar + routed view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use sweet_core::session::SessionState;

use crate::features::{admin, cart, dashboard, login};
use crate::route::Route;
use crate::state::AppState;

/// Draws one frame of the current state.
pub fn view(frame: &mut Frame, app: &AppState) {
    let [nav_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_navbar(frame, app, nav_area);

    if app.session.is_loading() {
        let loading = Paragraph::new("Loading Sweet Shop...")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(loading, body_area);
        return;
    }

    match app.route {
        Route::Dashboard => dashboard::render_dashboard(frame, &app.dashboard, body_area),
        Route::Login => {
            login::render_login(frame, &app.login, app.tasks.login.is_running(), body_area);
        }
        Route::Cart => cart::render_cart(frame, body_area),
        Route::Admin => admin::render_admin(frame, &app.admin, body_area),
    }
}

fn render_navbar(frame: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let identity = match &app.session {
        SessionState::Authenticated { session, .. } => {
            format!("{} ({})", session.username, session.role)
        }
        SessionState::Anonymous => "not signed in".to_string(),
        SessionState::Loading => "...".to_string(),
    };

    let mut spans = vec![Span::styled(
        " Sweet Shop ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for route in [Route::Dashboard, Route::Cart, Route::Admin, Route::Login] {
        let style = if route == app.route {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", route.title()), style));
    }
    spans.push(Span::styled(
        format!("  {identity}  ^H/^T/^A/^L: views  ^O: logout  ^Q: quit"),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
