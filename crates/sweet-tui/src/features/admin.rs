//! Admin panel: catalog management for admin sessions.
//!
//! The route guard only lets admin sessions in, but the server re-checks the
//! role on every call; a 403 surfaces here as a status message like any
//! other failure.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Row, Table};
use sweet_core::catalog::CatalogItem;

use crate::common::{LatestOnly, RequestId, TaskId};
use crate::effects::UiEffect;

/// How many units a restock adds per keypress.
const RESTOCK_STEP: u32 = 10;

/// Admin panel state. Holds its own copy of the catalog, refreshed
/// independently of the dashboard.
#[derive(Debug, Default)]
pub struct AdminState {
    pub items: Vec<CatalogItem>,
    pub selected: usize,
    pub status: Option<String>,
    latest: LatestOnly,
}

/// Pending admin operation the reducer turns into an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Refresh,
    Delete { item_id: u64 },
    Restock { item_id: u64, quantity: u32 },
}

impl AdminState {
    /// Starts a list refresh, superseding any in-flight one.
    pub fn begin_refresh(&mut self) -> RequestId {
        self.latest.begin()
    }

    /// Applies a refresh response unless stale.
    pub fn apply_list(&mut self, request: RequestId, result: Result<Vec<CatalogItem>, String>) {
        if !self.latest.finish_if_active(request) {
            return;
        }
        match result {
            Ok(items) => {
                self.items = items;
                if self.selected >= self.items.len() {
                    self.selected = self.items.len().saturating_sub(1);
                }
            }
            Err(message) => self.status = Some(message),
        }
    }

    /// Applies a delete result. The list shrinks optimistically on success;
    /// the next refresh re-syncs with the server either way.
    pub fn apply_delete(&mut self, item_id: u64, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.items.retain(|i| i.id != item_id);
                if self.selected >= self.items.len() {
                    self.selected = self.items.len().saturating_sub(1);
                }
                self.status = Some("Sweet deleted".to_string());
            }
            Err(message) => self.status = Some(message),
        }
    }

    /// Applies a restock result, updating the local quantity on success.
    pub fn apply_restock(&mut self, item_id: u64, quantity: u32, result: Result<(), String>) {
        match result {
            Ok(()) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
                    item.quantity = quantity;
                }
                self.status = Some("Stock updated".to_string());
            }
            Err(message) => self.status = Some(message),
        }
    }

    fn selected_item(&self) -> Option<&CatalogItem> {
        self.items.get(self.selected)
    }
}

/// Handles a key event on the admin panel.
pub fn handle_key(admin: &mut AdminState, key: KeyEvent) -> Option<AdminAction> {
    match key.code {
        KeyCode::Char('r') => Some(AdminAction::Refresh),
        KeyCode::Char('d') => admin
            .selected_item()
            .map(|item| AdminAction::Delete { item_id: item.id }),
        KeyCode::Char('+') => admin.selected_item().map(|item| AdminAction::Restock {
            item_id: item.id,
            quantity: item.quantity.saturating_add(RESTOCK_STEP),
        }),
        KeyCode::Down => {
            if !admin.items.is_empty() {
                admin.selected = (admin.selected + 1).min(admin.items.len() - 1);
            }
            None
        }
        KeyCode::Up => {
            admin.selected = admin.selected.saturating_sub(1);
            None
        }
        _ => None,
    }
}

/// Turns an admin action into its effect, given a fresh task or request id.
pub fn action_effect(admin: &mut AdminState, action: AdminAction, task: TaskId) -> UiEffect {
    match action {
        AdminAction::Refresh => UiEffect::SpawnAdminList {
            request: admin.begin_refresh(),
        },
        AdminAction::Delete { item_id } => UiEffect::SpawnAdminDelete { task, item_id },
        AdminAction::Restock { item_id, quantity } => UiEffect::SpawnAdminRestock {
            task,
            item_id,
            quantity,
        },
    }
}

/// Renders the admin panel.
pub fn render_admin(frame: &mut Frame, admin: &AdminState, area: Rect) {
    let [status_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let status = admin.status.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(status)).style(Style::default().fg(Color::Cyan)),
        status_area,
    );

    let rows: Vec<Row> = admin
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut style = Style::default();
            if i == admin.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Row::new(vec![
                item.id.to_string(),
                item.name.clone(),
                item.category.clone(),
                format!("${:.2}", item.price),
                item.quantity.to_string(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Id", "Name", "Category", "Price", "Qty"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::bordered().title("Admin - r: refresh  d: delete  +: restock"));

    frame.render_widget(table, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn item(id: u64, quantity: u32) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("item-{id}"),
            category: "Candy".to_string(),
            price: 1.0,
            quantity,
        }
    }

    #[test]
    fn stale_refresh_is_dropped() {
        let mut admin = AdminState::default();
        let first = admin.begin_refresh();
        let second = admin.begin_refresh();

        admin.apply_list(second, Ok(vec![item(1, 5)]));
        admin.apply_list(first, Ok(vec![item(1, 5), item(2, 5)]));
        assert_eq!(admin.items.len(), 1);
    }

    #[test]
    fn delete_removes_from_local_list() {
        let mut admin = AdminState {
            items: vec![item(1, 5), item(2, 5)],
            selected: 1,
            ..AdminState::default()
        };
        admin.apply_delete(2, Ok(()));
        assert_eq!(admin.items.len(), 1);
        assert_eq!(admin.selected, 0);
    }

    #[test]
    fn failed_delete_keeps_the_item_and_reports() {
        let mut admin = AdminState {
            items: vec![item(1, 5)],
            ..AdminState::default()
        };
        admin.apply_delete(1, Err("Admin privileges required".to_string()));
        assert_eq!(admin.items.len(), 1);
        assert_eq!(admin.status.as_deref(), Some("Admin privileges required"));
    }

    #[test]
    fn restock_key_targets_the_selected_item() {
        let mut admin = AdminState {
            items: vec![item(1, 5), item(2, 7)],
            selected: 1,
            ..AdminState::default()
        };
        let action = handle_key(&mut admin, key(KeyCode::Char('+')));
        assert_eq!(
            action,
            Some(AdminAction::Restock {
                item_id: 2,
                quantity: 7 + RESTOCK_STEP
            })
        );
    }

    #[test]
    fn restock_near_the_quantity_ceiling_saturates() {
        let mut admin = AdminState {
            items: vec![item(1, u32::MAX - 3)],
            ..AdminState::default()
        };
        let action = handle_key(&mut admin, key(KeyCode::Char('+')));
        assert_eq!(
            action,
            Some(AdminAction::Restock {
                item_id: 1,
                quantity: u32::MAX
            })
        );
    }

    #[test]
    fn delete_key_with_empty_list_does_nothing() {
        let mut admin = AdminState::default();
        assert_eq!(handle_key(&mut admin, key(KeyCode::Char('d'))), None);
    }
}
