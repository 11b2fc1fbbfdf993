//! Dashboard view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};

use super::state::{CatalogPhase, DashboardState, FeedbackKind};

/// Renders the dashboard: search bar, transient banner, catalog table.
pub fn render_dashboard(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    let [search_area, banner_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    render_search_bar(frame, dash, search_area);
    render_banner(frame, dash, banner_area);
    render_items(frame, dash, list_area);
}

fn render_search_bar(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    let title = if dash.is_loading() {
        "Search (loading...)"
    } else {
        "Search sweets by name or category"
    };
    let input = Paragraph::new(format!("{}█", dash.search))
        .block(Block::bordered().title(title));
    frame.render_widget(input, area);
}

fn render_banner(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    let line = if let Some(feedback) = &dash.feedback {
        let color = match feedback.kind {
            FeedbackKind::Success => Color::Green,
            FeedbackKind::Failure => Color::Red,
        };
        Line::from(Span::styled(
            feedback.message.clone(),
            Style::default().fg(color),
        ))
    } else if let Some(error) = &dash.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_items(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    if dash.phase == CatalogPhase::Loaded && dash.items.is_empty() {
        let empty = Paragraph::new("No sweets found matching your search")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = dash
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let stock = if item.in_stock() {
                Span::styled(
                    format!("{} in stock", item.quantity),
                    Style::default().fg(Color::Green),
                )
            } else {
                Span::styled("Out of stock", Style::default().fg(Color::DarkGray))
            };
            let highlighted = dash
                .feedback
                .as_ref()
                .is_some_and(|f| f.item_id == item.id);

            let mut style = Style::default();
            if i == dash.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if highlighted {
                style = style.fg(Color::Green);
            }

            Row::new(vec![
                Line::from(item.name.clone()),
                Line::from(item.category.clone()),
                Line::from(format!("${:.2}", item.price)),
                Line::from(stock),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Min(14),
        ],
    )
    .header(
        Row::new(vec!["Name", "Category", "Price", "Stock"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::bordered().title("Sweet Shop - Enter to purchase"));

    frame.render_widget(table, area);
}
