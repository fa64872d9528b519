use serde::Serialize;
use shared::{Catalog, Price};

use crate::error::CartError;

/// Quantity record for one catalog item. Lines are never added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Increment { name: String },
    Decrement { name: String },
    SetZero { name: String },
    ClearAll,
}

impl CartAction {
    pub fn label(&self) -> &'static str {
        match self {
            CartAction::Increment { .. } => "increment",
            CartAction::Decrement { .. } => "decrement",
            CartAction::SetZero { .. } => "set_zero",
            CartAction::ClearAll => "clear_all",
        }
    }
}

/// One line per catalog item, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            lines: catalog
                .items()
                .iter()
                .map(|item| CartLine {
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity: 0,
                })
                .collect(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.line(name).map(|line| line.quantity)
    }

    /// Lines with a positive quantity, in catalog order.
    pub fn filled_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| line.quantity > 0)
    }

    /// Produces the next state; `self` is left untouched.
    pub fn apply(&self, action: &CartAction) -> Result<CartState, CartError> {
        let mut next = self.clone();
        match action {
            CartAction::Increment { name } => {
                let line = next.line_mut(name)?;
                line.quantity = line.quantity.saturating_add(1);
            }
            CartAction::Decrement { name } => {
                let line = next.line_mut(name)?;
                if line.quantity == 0 {
                    tracing::warn!(item = %name, "decrement on empty cart line clamped at zero");
                }
                line.quantity = line.quantity.saturating_sub(1);
            }
            CartAction::SetZero { name } => {
                next.line_mut(name)?.quantity = 0;
            }
            CartAction::ClearAll => {
                for line in &mut next.lines {
                    line.quantity = 0;
                }
            }
        }
        Ok(next)
    }

    fn line_mut(&mut self, name: &str) -> Result<&mut CartLine, CartError> {
        self.lines
            .iter_mut()
            .find(|line| line.name == name)
            .ok_or_else(|| CartError::UnknownItem {
                name: name.to_string(),
            })
    }
}

/// Owns the current cart value. Mutators swap in the next state only on success.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            state: CartState::from_catalog(catalog),
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CartAction) -> Result<&CartState, CartError> {
        let next = self.state.apply(&action)?;
        tracing::debug!(action = action.label(), "cart state updated");
        self.state = next;
        Ok(&self.state)
    }

    pub fn increment(&mut self, name: &str) -> Result<&CartState, CartError> {
        self.dispatch(CartAction::Increment {
            name: name.to_string(),
        })
    }

    pub fn decrement(&mut self, name: &str) -> Result<&CartState, CartError> {
        self.dispatch(CartAction::Decrement {
            name: name.to_string(),
        })
    }

    pub fn set_zero(&mut self, name: &str) -> Result<&CartState, CartError> {
        self.dispatch(CartAction::SetZero {
            name: name.to_string(),
        })
    }

    pub fn clear_all(&mut self) -> Result<&CartState, CartError> {
        self.dispatch(CartAction::ClearAll)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
