//! Pure render rules. Frontends draw these structs and never read cart
//! state directly, so the visibility rules live in one place.

use serde::Serialize;
use shared::ItemImage;

use crate::{
    overlay::ConfirmedOrder,
    session::Session,
    store::CartLine,
    totals::{format_price_label, line_subtotal, total_cost, total_item_count},
};

pub const PAGE_TITLE: &str = "Desserts";
pub const EMPTY_CART_MESSAGE: &str = "Your added items will appear here";
pub const CARBON_NEUTRAL_NOTE: &str = "This is a carbon neutral delivery";
pub const ORDER_CONFIRMED_TITLE: &str = "Order Confirmed";
pub const ORDER_CONFIRMED_SUBTITLE: &str = "We hope you enjoy your food!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: String,
    pub cards: Vec<ItemCardView>,
    pub cart: CartPanelView,
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardControl {
    AddToCart,
    Stepper { quantity: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCardView {
    pub name: String,
    pub category: String,
    pub price_label: String,
    pub image: ItemImage,
    pub control: CardControl,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub name: String,
    pub thumbnail: String,
    pub quantity: u32,
    pub quantity_label: String,
    pub unit_price_label: String,
    pub subtotal_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartPanelBody {
    Empty {
        message: String,
    },
    Filled {
        lines: Vec<CartLineView>,
        total_label: String,
        delivery_note: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartPanelView {
    pub title: String,
    pub item_count: u64,
    pub body: CartPanelBody,
}

impl CartPanelView {
    pub fn lines(&self) -> &[CartLineView] {
        match &self.body {
            CartPanelBody::Empty { .. } => &[],
            CartPanelBody::Filled { lines, .. } => lines,
        }
    }

    /// "Confirm Order" is only offered for a non-empty cart.
    pub fn can_confirm(&self) -> bool {
        matches!(self.body, CartPanelBody::Filled { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<CartLineView>,
    pub total_label: String,
}

pub fn render_page(session: &Session) -> PageView {
    PageView {
        title: PAGE_TITLE.to_string(),
        cards: render_cards(session),
        cart: render_cart_panel(session),
        overlay: session.overlay().confirmed().map(|order| render_overlay(session, order)),
    }
}

pub fn render_cards(session: &Session) -> Vec<ItemCardView> {
    let cart = session.cart();
    session
        .catalog()
        .items()
        .iter()
        .map(|item| {
            let quantity = cart.quantity(&item.name).unwrap_or_default();
            ItemCardView {
                name: item.name.clone(),
                category: item.category.clone(),
                price_label: format_price_label(item.price),
                image: item.image.clone(),
                control: if quantity == 0 {
                    CardControl::AddToCart
                } else {
                    CardControl::Stepper { quantity }
                },
                selected: quantity > 0,
            }
        })
        .collect()
}

pub fn render_cart_panel(session: &Session) -> CartPanelView {
    let cart = session.cart();
    let item_count = total_item_count(cart);
    let body = if item_count == 0 {
        CartPanelBody::Empty {
            message: EMPTY_CART_MESSAGE.to_string(),
        }
    } else {
        CartPanelBody::Filled {
            lines: render_lines(session, cart.filled_lines()),
            total_label: format_price_label(total_cost(cart)),
            delivery_note: CARBON_NEUTRAL_NOTE.to_string(),
        }
    };

    CartPanelView {
        title: format!("Your Cart ({item_count})"),
        item_count,
        body,
    }
}

fn render_overlay(session: &Session, order: &ConfirmedOrder) -> OverlayView {
    OverlayView {
        title: ORDER_CONFIRMED_TITLE.to_string(),
        subtitle: ORDER_CONFIRMED_SUBTITLE.to_string(),
        lines: render_lines(session, order.lines.iter()),
        total_label: format_price_label(order.total),
    }
}

fn render_lines<'a>(
    session: &Session,
    lines: impl Iterator<Item = &'a CartLine>,
) -> Vec<CartLineView> {
    lines
        .filter(|line| line.quantity > 0)
        .map(|line| CartLineView {
            name: line.name.clone(),
            thumbnail: session
                .catalog()
                .get(&line.name)
                .map(|item| item.image.thumbnail.clone())
                .unwrap_or_default(),
            quantity: line.quantity,
            quantity_label: format!("{}x", line.quantity),
            unit_price_label: format!("@ {}", format_price_label(line.unit_price)),
            subtotal_label: format_price_label(line_subtotal(line)),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
