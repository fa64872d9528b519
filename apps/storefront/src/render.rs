//! Plain-text drawing of the catalog and the page view.

use std::fmt::Write as _;

use cart_core::{format_price_label, CardControl, CartLineView, CartPanelBody, PageView};
use shared::Catalog;

pub fn catalog_listing(catalog: &Catalog) -> String {
    let width = catalog
        .items()
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for item in catalog.items() {
        let _ = writeln!(
            out,
            "{:<width$}  {:>8}  {}",
            item.name,
            format_price_label(item.price),
            item.category,
        );
    }
    out
}

pub fn page(view: &PageView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    for card in &view.cards {
        let control = match card.control {
            CardControl::AddToCart => "[Add to Cart]".to_string(),
            CardControl::Stepper { quantity } => format!("[-] {quantity} [+]"),
        };
        let marker = if card.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {} ({}) {}  {control}",
            card.name, card.category, card.price_label
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.cart.title);
    match &view.cart.body {
        CartPanelBody::Empty { message } => {
            let _ = writeln!(out, "  {message}");
        }
        CartPanelBody::Filled {
            lines,
            total_label,
            delivery_note,
        } => {
            write_lines(&mut out, lines);
            let _ = writeln!(out, "  Order Total {total_label}");
            let _ = writeln!(out, "  {delivery_note}");
            let _ = writeln!(out, "  [Confirm Order]");
        }
    }

    if let Some(overlay) = &view.overlay {
        let _ = writeln!(out);
        let _ = writeln!(out, "== {} ==", overlay.title);
        let _ = writeln!(out, "{}", overlay.subtitle);
        write_lines(&mut out, &overlay.lines);
        let _ = writeln!(out, "  Order Total {}", overlay.total_label);
        let _ = writeln!(out, "  [Start New Order]");
    }

    out
}

fn write_lines(out: &mut String, lines: &[CartLineView]) {
    for line in lines {
        let _ = writeln!(
            out,
            "  {} {} {} {}",
            line.name, line.quantity_label, line.unit_price_label, line.subtotal_label
        );
    }
}
