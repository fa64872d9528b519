use serde::Serialize;
use shared::Price;

use crate::{
    store::{CartLine, CartState},
    totals::{total_cost, total_item_count},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayState {
    Hidden,
    Visible,
}

/// The cart as it stood when "Confirm Order" was pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmedOrder {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: Price,
}

impl ConfirmedOrder {
    pub fn capture(state: &CartState) -> Self {
        Self {
            lines: state.filled_lines().cloned().collect(),
            item_count: total_item_count(state),
            total: total_cost(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderOverlay {
    #[default]
    Hidden,
    Visible(ConfirmedOrder),
}

impl OrderOverlay {
    pub fn state(&self) -> OverlayState {
        match self {
            OrderOverlay::Hidden => OverlayState::Hidden,
            OrderOverlay::Visible(_) => OverlayState::Visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, OrderOverlay::Visible(_))
    }

    pub fn confirmed(&self) -> Option<&ConfirmedOrder> {
        match self {
            OrderOverlay::Hidden => None,
            OrderOverlay::Visible(order) => Some(order),
        }
    }

    pub fn show(&mut self, order: ConfirmedOrder) {
        *self = OrderOverlay::Visible(order);
    }

    pub fn hide(&mut self) {
        *self = OrderOverlay::Hidden;
    }
}
