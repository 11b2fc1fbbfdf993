//! Cart view.
//!
//! The cart route is session-gated like the dashboard; checkout itself lives
//! server-side and is not part of this client.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub fn render_cart(frame: &mut Frame, area: Rect) {
    let [inner] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        Line::from("Your cart is empty."),
        Line::from(""),
        Line::from("Purchases on the dashboard ship straight away; sweets don't keep."),
    ];
    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(Block::bordered().title("Cart"));
    frame.render_widget(body, inner);
}
