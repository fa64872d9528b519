//! UI events and error modeling for the storefront controller.

use cart_core::{CartError, Intent};

/// Something a widget asked for during the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Intent(Intent),
    DismissBanner,
}

impl From<Intent> for UiEvent {
    fn from(intent: Intent) -> Self {
        UiEvent::Intent(intent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Catalog,
    OrderState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_cart_error(intent: &Intent, err: &CartError) -> Self {
        let category = match err {
            CartError::UnknownItem { .. } => UiErrorCategory::Catalog,
            CartError::EmptyOrder | CartError::OrderPending => UiErrorCategory::OrderState,
        };
        let message = match err {
            CartError::UnknownItem { name } => {
                format!("'{name}' is not on the menu; the catalog may have changed.")
            }
            CartError::EmptyOrder => "Add something to your cart before confirming.".to_string(),
            CartError::OrderPending => {
                format!("Finish the confirmed order before you {}.", action_phrase(intent))
            }
        };

        Self { category, message }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn action_phrase(intent: &Intent) -> &'static str {
    match intent {
        Intent::AddToCart { .. } | Intent::Increment { .. } => "add items",
        Intent::Decrement { .. } | Intent::Remove { .. } => "remove items",
        Intent::ConfirmOrder => "confirm again",
        Intent::StartNewOrder => "start over",
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Catalog => "Menu",
        UiErrorCategory::OrderState => "Order",
    }
}
