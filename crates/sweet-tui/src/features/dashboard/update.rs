//! Dashboard key handling.
//!
//! Every edit of the search term issues a new scoped query immediately (the
//! source UI queried per keystroke); stale responses are suppressed by the
//! request-id guard rather than debounced.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::DashboardState;
use crate::effects::UiEffect;

/// Handles a key event on the dashboard. Returns effects to execute.
pub fn handle_key(dash: &mut DashboardState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char(c) => {
            dash.search.push(c);
            vec![dash.begin_search()]
        }
        KeyCode::Backspace => {
            if dash.search.pop().is_some() {
                vec![dash.begin_search()]
            } else {
                vec![]
            }
        }
        KeyCode::Down => {
            dash.select_next();
            vec![]
        }
        KeyCode::Up => {
            dash.select_prev();
            vec![]
        }
        KeyCode::Enter => dash.request_purchase().into_iter().collect(),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use sweet_core::catalog::CatalogItem;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn typing_issues_a_new_scoped_search() {
        let mut dash = DashboardState::default();
        let effects = handle_key(&mut dash, key(KeyCode::Char('c')));
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            UiEffect::SpawnSearch { term, .. } if term == "c"
        ));
    }

    #[test]
    fn backspace_on_empty_term_does_nothing() {
        let mut dash = DashboardState::default();
        assert!(handle_key(&mut dash, key(KeyCode::Backspace)).is_empty());
    }

    #[test]
    fn enter_on_sold_out_item_issues_no_network_call() {
        let mut dash = DashboardState::default();
        dash.items = vec![CatalogItem {
            id: 1,
            name: "Jawbreaker".to_string(),
            category: "Hard Candy".to_string(),
            price: 0.99,
            quantity: 0,
        }];
        assert!(handle_key(&mut dash, key(KeyCode::Enter)).is_empty());
    }
}
