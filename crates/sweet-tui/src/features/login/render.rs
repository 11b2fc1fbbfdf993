//! Login form view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::{LoginField, LoginMode, LoginState};

/// Renders the sign-in / register form, centered in the available area.
pub fn render_login(frame: &mut Frame, login: &LoginState, in_progress: bool, area: Rect) {
    let [form_area] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(area);
    let [form_area] = Layout::vertical([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(form_area);

    let title = match login.mode {
        LoginMode::SignIn => "Welcome Back - Sweet Shop",
        LoginMode::Register => "Join Us - Sweet Shop",
    };

    let field = |label: &str, value: &str, focused: bool| {
        let cursor = if focused { "█" } else { "" };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{value}{cursor}"), style),
        ])
    };

    let masked: String = "*".repeat(login.password.chars().count());
    let mut lines = vec![
        Line::from(""),
        field(
            "Username",
            &login.username,
            login.focus == LoginField::Username,
        ),
        field("Password", &masked, login.focus == LoginField::Password),
    ];
    if login.mode == LoginMode::Register {
        lines.push(field(
            "Account type",
            &login.role_or_default().to_string(),
            login.focus == LoginField::Role,
        ));
    }
    lines.push(Line::from(""));

    if in_progress {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Cyan),
        )));
    } else if let Some(error) = &login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(notice) = &login.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let toggle_hint = match login.mode {
        LoginMode::SignIn => "Ctrl+R: create an account",
        LoginMode::Register => "Ctrl+R: back to sign in",
    };
    lines.push(Line::from(Span::styled(
        format!("Enter: submit  Tab: next field  {toggle_hint}"),
        Style::default().fg(Color::DarkGray),
    )));

    let form = Paragraph::new(lines).block(Block::bordered().title(title));
    frame.render_widget(form, form_area);
}
