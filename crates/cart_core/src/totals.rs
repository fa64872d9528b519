use rust_decimal::{Decimal, RoundingStrategy};
use shared::Price;

use crate::store::{CartLine, CartState};

pub fn total_item_count(state: &CartState) -> u64 {
    state
        .lines()
        .iter()
        .map(|line| u64::from(line.quantity))
        .sum()
}

pub fn line_subtotal(line: &CartLine) -> Price {
    line.unit_price * Decimal::from(line.quantity)
}

pub fn total_cost(state: &CartState) -> Price {
    state.lines().iter().map(line_subtotal).sum()
}

/// Two decimal places, midpoint rounded away from zero: `19.5` -> `"19.50"`.
pub fn format_money(amount: Price) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

pub fn format_price_label(amount: Price) -> String {
    format!("${}", format_money(amount))
}
