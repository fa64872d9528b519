use super::*;
use crate::intent::Intent;
use shared::{Catalog, Item};

fn session() -> Session {
    Session::new(
        Catalog::new(vec![
            Item::new("Tart", "Pie", "5.00".parse().expect("price")),
            Item::new("Cake", "Cake", "3.50".parse().expect("price")),
        ])
        .expect("catalog"),
    )
}

fn apply(session: &mut Session, raw: &str) {
    let intent: Intent = raw.parse().expect("intent");
    session.apply(&intent).expect("apply");
}

#[test]
fn empty_cart_renders_empty_state_and_add_buttons() {
    let page = render_page(&session());

    assert_eq!(page.title, "Desserts");
    assert!(page
        .cards
        .iter()
        .all(|card| card.control == CardControl::AddToCart && !card.selected));
    assert_eq!(page.cart.title, "Your Cart (0)");
    assert_eq!(
        page.cart.body,
        CartPanelBody::Empty {
            message: EMPTY_CART_MESSAGE.to_string()
        }
    );
    assert!(!page.cart.can_confirm());
    assert!(page.overlay.is_none());
}

#[test]
fn card_switches_to_stepper_once_quantity_is_positive() {
    let mut session = session();
    apply(&mut session, "add:Cake");
    apply(&mut session, "inc:Cake");

    let cards = render_cards(&session);

    assert_eq!(cards[0].control, CardControl::AddToCart);
    assert_eq!(cards[1].control, CardControl::Stepper { quantity: 2 });
    assert!(cards[1].selected);
    assert_eq!(cards[1].price_label, "$3.50");
}

#[test]
fn cart_panel_lists_only_filled_lines_with_labels() {
    let mut session = session();
    apply(&mut session, "add:Tart");
    apply(&mut session, "add:Tart");
    apply(&mut session, "add:Cake");

    let panel = render_cart_panel(&session);

    assert_eq!(panel.title, "Your Cart (3)");
    assert!(panel.can_confirm());
    let CartPanelBody::Filled {
        lines,
        total_label,
        delivery_note,
    } = &panel.body
    else {
        panic!("expected filled cart panel");
    };
    assert_eq!(total_label, "$13.50");
    assert_eq!(delivery_note, CARBON_NEUTRAL_NOTE);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity_label, "2x");
    assert_eq!(lines[0].unit_price_label, "@ $5.00");
    assert_eq!(lines[0].subtotal_label, "$10.00");
    assert_eq!(lines[1].thumbnail, "./assets/images/image-cake-thumbnail.jpg");
}

#[test]
fn removing_a_line_drops_it_from_panel_and_overlay() {
    let mut session = session();
    apply(&mut session, "add:Tart");
    apply(&mut session, "add:Cake");
    apply(&mut session, "remove:Tart");
    apply(&mut session, "confirm");

    let page = render_page(&session);

    let panel_names: Vec<_> = page.cart.lines().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(panel_names, ["Cake"]);

    let overlay = page.overlay.expect("overlay visible");
    assert_eq!(overlay.title, ORDER_CONFIRMED_TITLE);
    assert_eq!(overlay.subtitle, ORDER_CONFIRMED_SUBTITLE);
    let overlay_names: Vec<_> = overlay.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(overlay_names, ["Cake"]);
    assert_eq!(overlay.total_label, "$3.50");
}

#[test]
fn overlay_disappears_after_starting_a_new_order() {
    let mut session = session();
    apply(&mut session, "add:Tart");
    apply(&mut session, "confirm");
    apply(&mut session, "new-order");

    let page = render_page(&session);

    assert!(page.overlay.is_none());
    assert_eq!(page.cart.title, "Your Cart (0)");
}

#[test]
fn page_view_serializes_with_tagged_controls() {
    let mut session = session();
    apply(&mut session, "add:Tart");

    let json = serde_json::to_value(render_page(&session)).expect("serialize");

    assert_eq!(json["cards"][0]["control"]["kind"], "stepper");
    assert_eq!(json["cards"][0]["control"]["quantity"], 1);
    assert_eq!(json["cards"][1]["control"]["kind"], "add_to_cart");
    assert_eq!(json["cart"]["body"]["kind"], "filled");
    assert_eq!(json["cart"]["body"]["total_label"], "$5.00");
}
