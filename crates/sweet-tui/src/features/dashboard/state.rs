//! Catalog view-model state.
//!
//! Owns the displayed item list, reconciles it after purchases, and manages
//! the transient purchase banner. The authoritative catalog lives
//! server-side; after a successful purchase the local quantity is
//! decremented optimistically and nothing is re-fetched until the next
//! search rewrites the list.

use std::time::{Duration, Instant};

use sweet_core::catalog::CatalogItem;

use crate::common::{LatestOnly, RequestId};
use crate::effects::UiEffect;

/// How long a purchase banner stays on screen.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(3);

/// Query cycle state. One cycle per issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Failure,
}

/// Transient purchase banner. References the item by id only (for row
/// highlighting); it does not own the item.
#[derive(Debug, Clone)]
pub struct PurchaseFeedback {
    pub item_id: u64,
    pub message: String,
    pub kind: FeedbackKind,
    deadline: Instant,
}

impl PurchaseFeedback {
    fn success(item_id: u64, item_name: &str, now: Instant) -> Self {
        Self {
            item_id,
            message: format!("Congratulations! You bought {item_name}"),
            kind: FeedbackKind::Success,
            deadline: now + FEEDBACK_TTL,
        }
    }

    fn failure(item_id: u64, error: &str, now: Instant) -> Self {
        Self {
            item_id,
            message: format!("Failed to purchase: {error}"),
            kind: FeedbackKind::Failure,
            deadline: now + FEEDBACK_TTL,
        }
    }

    fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Dashboard state.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Current search term (empty = unscoped listing).
    pub search: String,
    /// Query cycle phase.
    pub phase: CatalogPhase,
    /// Displayed items; rewritten wholesale by each applied search response.
    pub items: Vec<CatalogItem>,
    /// Last search error, shown while `Failed`.
    pub error: Option<String>,
    /// Cursor position in the item list.
    pub selected: usize,
    /// Stale-result guard for searches.
    latest: LatestOnly,
    /// Active purchase banner, if any.
    pub feedback: Option<PurchaseFeedback>,
}

impl DashboardState {
    /// Issues a new search for the current term, superseding any in-flight
    /// one. The phase moves to `Loading` from any state.
    pub fn begin_search(&mut self) -> UiEffect {
        let request = self.latest.begin();
        self.phase = CatalogPhase::Loading;
        self.error = None;
        UiEffect::SpawnSearch {
            request,
            term: self.search.clone(),
        }
    }

    /// Applies a search response, unless it is stale.
    ///
    /// Last-write-wins by issue order: a slower request completing after a
    /// newer one is dropped here. On failure the previous list is preserved.
    pub fn apply_search(
        &mut self,
        request: RequestId,
        result: Result<Vec<CatalogItem>, String>,
    ) {
        if !self.latest.finish_if_active(request) {
            tracing::debug!(?request, "dropping stale search response");
            return;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = CatalogPhase::Loaded;
                self.error = None;
                if self.selected >= self.items.len() {
                    self.selected = self.items.len().saturating_sub(1);
                }
            }
            Err(message) => {
                self.phase = CatalogPhase::Failed;
                self.error = Some(message);
            }
        }
    }

    /// True while a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }

    /// Currently selected item, if the list is non-empty.
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.items.get(self.selected)
    }

    /// Requests a purchase of the selected item.
    ///
    /// An item with quantity 0 is rejected locally: no effect, no network
    /// call. Nothing is marked in-flight either: concurrent purchases of
    /// the same item are intentionally not deduplicated; the server is the
    /// stock authority.
    pub fn request_purchase(&self) -> Option<UiEffect> {
        let item = self.selected_item()?;
        if !item.in_stock() {
            return None;
        }
        Some(UiEffect::SpawnPurchase {
            item_id: item.id,
            item_name: item.name.clone(),
        })
    }

    /// Applies a purchase result.
    ///
    /// Success decrements the item's displayed quantity by exactly 1
    /// (optimistic, no re-fetch) and raises a success banner; failure leaves
    /// quantities untouched and raises a failure banner. Either banner
    /// self-clears after [`FEEDBACK_TTL`].
    pub fn apply_purchase(
        &mut self,
        item_id: u64,
        item_name: &str,
        result: Result<(), String>,
        now: Instant,
    ) {
        match result {
            Ok(()) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
                    item.quantity = item.quantity.saturating_sub(1);
                }
                self.feedback = Some(PurchaseFeedback::success(item_id, item_name, now));
            }
            Err(error) => {
                self.feedback = Some(PurchaseFeedback::failure(item_id, &error, now));
            }
        }
    }

    /// Clears the banner once its deadline has passed. Called on ticks.
    pub fn sweep_feedback(&mut self, now: Instant) {
        if let Some(feedback) = &self.feedback
            && feedback.expired(now)
        {
            self.feedback = None;
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, quantity: u32) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            category: "Chocolate".to_string(),
            price: 4.99,
            quantity,
        }
    }

    #[test]
    fn search_cycle_idle_loading_loaded() {
        let mut dash = DashboardState::default();
        assert_eq!(dash.phase, CatalogPhase::Idle);

        let effect = dash.begin_search();
        assert_eq!(dash.phase, CatalogPhase::Loading);
        let UiEffect::SpawnSearch { request, term } = effect else {
            panic!("expected a search effect");
        };
        assert_eq!(term, "");

        dash.apply_search(request, Ok(vec![item(1, "Gummy Bears", 20)]));
        assert_eq!(dash.phase, CatalogPhase::Loaded);
        assert_eq!(dash.items.len(), 1);
    }

    #[test]
    fn failed_search_preserves_previous_list() {
        let mut dash = DashboardState::default();
        let UiEffect::SpawnSearch { request, .. } = dash.begin_search() else {
            panic!()
        };
        dash.apply_search(request, Ok(vec![item(1, "Gummy Bears", 20)]));

        let UiEffect::SpawnSearch { request, .. } = dash.begin_search() else {
            panic!()
        };
        dash.apply_search(request, Err("Failed to load sweets".to_string()));

        assert_eq!(dash.phase, CatalogPhase::Failed);
        assert_eq!(dash.error.as_deref(), Some("Failed to load sweets"));
        assert_eq!(dash.items.len(), 1, "previous list must survive a failure");
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_result() {
        let mut dash = DashboardState::default();

        // First search: unscoped, 4 items. Second search ("choc") is issued
        // before the first completes.
        let UiEffect::SpawnSearch { request: first, .. } = dash.begin_search() else {
            panic!()
        };
        dash.search = "choc".to_string();
        let UiEffect::SpawnSearch { request: second, .. } = dash.begin_search() else {
            panic!()
        };

        // The newer request completes first.
        dash.apply_search(second, Ok(vec![item(2, "Chocolate Truffles", 15)]));
        assert_eq!(dash.items.len(), 1);

        // The older response arrives afterwards and must be dropped.
        dash.apply_search(
            first,
            Ok(vec![
                item(1, "Gummy Bears", 20),
                item(2, "Chocolate Truffles", 15),
                item(3, "Lollipops", 50),
                item(4, "Marshmallows", 25),
            ]),
        );
        assert_eq!(dash.items.len(), 1, "stale result must be suppressed");
        assert_eq!(dash.items[0].name, "Chocolate Truffles");
        assert_eq!(dash.phase, CatalogPhase::Loaded);
    }

    #[test]
    fn empty_result_is_loaded_not_failed() {
        let mut dash = DashboardState::default();
        let UiEffect::SpawnSearch { request, .. } = dash.begin_search() else {
            panic!()
        };
        dash.apply_search(request, Ok(vec![]));
        assert_eq!(dash.phase, CatalogPhase::Loaded);
        assert!(dash.items.is_empty());
        assert_eq!(dash.error, None);
    }

    #[test]
    fn purchase_of_out_of_stock_item_is_rejected_locally() {
        let mut dash = DashboardState::default();
        dash.items = vec![item(1, "Gummy Bears", 0)];
        dash.selected = 0;
        assert_eq!(dash.request_purchase(), None);
    }

    #[test]
    fn successful_purchase_decrements_by_exactly_one() {
        let now = Instant::now();
        let mut dash = DashboardState::default();
        dash.items = vec![item(1, "Gummy Bears", 20)];
        dash.selected = 0;

        let effect = dash.request_purchase().expect("in stock, must purchase");
        assert_eq!(
            effect,
            UiEffect::SpawnPurchase {
                item_id: 1,
                item_name: "Gummy Bears".to_string()
            }
        );

        dash.apply_purchase(1, "Gummy Bears", Ok(()), now);
        assert_eq!(dash.items[0].quantity, 19);

        let feedback = dash.feedback.as_ref().expect("banner present");
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert!(feedback.message.contains("Gummy Bears"));
    }

    #[test]
    fn failed_purchase_leaves_quantity_untouched() {
        let now = Instant::now();
        let mut dash = DashboardState::default();
        dash.items = vec![item(1, "Gummy Bears", 20)];

        dash.apply_purchase(1, "Gummy Bears", Err("Out of stock".to_string()), now);
        assert_eq!(dash.items[0].quantity, 20);
        assert_eq!(dash.feedback.as_ref().unwrap().kind, FeedbackKind::Failure);
    }

    #[test]
    fn feedback_clears_after_ttl() {
        let now = Instant::now();
        let mut dash = DashboardState::default();
        dash.items = vec![item(1, "Gummy Bears", 20)];
        dash.apply_purchase(1, "Gummy Bears", Ok(()), now);

        dash.sweep_feedback(now + FEEDBACK_TTL - Duration::from_millis(1));
        assert!(dash.feedback.is_some(), "still within the ttl");

        dash.sweep_feedback(now + FEEDBACK_TTL);
        assert!(dash.feedback.is_none(), "gone once the deadline passes");
    }

    #[test]
    fn selection_is_clamped_when_the_list_shrinks() {
        let mut dash = DashboardState::default();
        let UiEffect::SpawnSearch { request, .. } = dash.begin_search() else {
            panic!()
        };
        dash.apply_search(
            request,
            Ok(vec![item(1, "a", 1), item(2, "b", 1), item(3, "c", 1)]),
        );
        dash.select_next();
        dash.select_next();
        assert_eq!(dash.selected, 2);

        let UiEffect::SpawnSearch { request, .. } = dash.begin_search() else {
            panic!()
        };
        dash.apply_search(request, Ok(vec![item(1, "a", 1)]));
        assert_eq!(dash.selected, 0);
    }
}
