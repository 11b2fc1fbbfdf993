//! Dashboard feature slice: the catalog view-model.

mod render;
mod state;
mod update;

pub use render::render_dashboard;
pub use state::{
    CatalogPhase, DashboardState, FEEDBACK_TTL, FeedbackKind, PurchaseFeedback,
};
pub use update::handle_key;
