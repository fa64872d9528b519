//! Cart state machine for the storefront: the cart store, derived totals,
//! the order-confirmation overlay, and the pure view model both frontends draw.

pub mod error;
pub mod intent;
pub mod overlay;
pub mod session;
pub mod store;
pub mod totals;
pub mod view;

pub use error::CartError;
pub use intent::{Intent, IntentParseError};
pub use overlay::{ConfirmedOrder, OrderOverlay, OverlayState};
pub use session::Session;
pub use store::{CartAction, CartLine, CartState, CartStore};
pub use totals::{format_money, format_price_label, line_subtotal, total_cost, total_item_count};
pub use view::{
    render_page, CardControl, CartLineView, CartPanelBody, CartPanelView, ItemCardView,
    OverlayView, PageView,
};
