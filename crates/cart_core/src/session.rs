use shared::{Catalog, Price};

use crate::{
    error::CartError,
    intent::Intent,
    overlay::{ConfirmedOrder, OrderOverlay, OverlayState},
    store::{CartState, CartStore},
    totals::{total_cost, total_item_count},
};

/// Owns the catalog, the cart and the confirmation overlay for one
/// storefront session. Every state change goes through here.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    store: CartStore,
    overlay: OrderOverlay,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let store = CartStore::new(&catalog);
        Self {
            catalog,
            store,
            overlay: OrderOverlay::Hidden,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        self.store.state()
    }

    pub fn overlay(&self) -> &OrderOverlay {
        &self.overlay
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn total_item_count(&self) -> u64 {
        total_item_count(self.store.state())
    }

    pub fn total_cost(&self) -> Price {
        total_cost(self.store.state())
    }

    pub fn apply(&mut self, intent: &Intent) -> Result<(), CartError> {
        match intent {
            Intent::AddToCart { name } | Intent::Increment { name } => {
                self.ensure_editable()?;
                self.store.increment(name)?;
            }
            Intent::Decrement { name } => {
                self.ensure_editable()?;
                self.store.decrement(name)?;
            }
            Intent::Remove { name } => {
                self.ensure_editable()?;
                self.store.set_zero(name)?;
            }
            Intent::ConfirmOrder => self.confirm_order()?,
            Intent::StartNewOrder => self.complete_order()?,
        }

        tracing::debug!(
            intent = intent.label(),
            item = intent.item_name().unwrap_or_default(),
            items_in_cart = self.total_item_count(),
            "applied intent"
        );
        Ok(())
    }

    /// `Hidden -> Visible`, capturing the current cart for the overlay.
    pub fn confirm_order(&mut self) -> Result<(), CartError> {
        self.ensure_editable()?;
        if self.total_item_count() == 0 {
            return Err(CartError::EmptyOrder);
        }

        let order = ConfirmedOrder::capture(self.store.state());
        tracing::info!(
            items = order.item_count,
            total = %order.total,
            "order confirmed"
        );
        self.overlay.show(order);
        Ok(())
    }

    /// "Start New Order": empties the cart and closes the overlay together.
    pub fn complete_order(&mut self) -> Result<(), CartError> {
        self.store.clear_all()?;
        self.overlay.hide();
        tracing::info!("started new order");
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), CartError> {
        if self.overlay.is_visible() {
            return Err(CartError::OrderPending);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
