//! Applies queued UI events to the session, one at a time and in order.

use cart_core::Session;

use crate::controller::events::{UiError, UiEvent};

/// Returns `true` when anything visible changed and the frame should be redrawn.
pub fn apply_ui_events(
    session: &mut Session,
    events: impl IntoIterator<Item = UiEvent>,
    banner: &mut Option<UiError>,
) -> bool {
    let mut changed = false;

    for event in events {
        match event {
            UiEvent::DismissBanner => {
                changed |= banner.take().is_some();
            }
            UiEvent::Intent(intent) => match session.apply(&intent) {
                Ok(()) => {
                    tracing::debug!(intent = intent.label(), "applied ui intent");
                    *banner = None;
                    changed = true;
                }
                Err(err) => {
                    tracing::warn!(intent = %intent, error = %err, "ui intent rejected");
                    *banner = Some(UiError::from_cart_error(&intent, &err));
                    changed = true;
                }
            },
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use cart_core::{Intent, OverlayState};
    use shared::{Catalog, Item};

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn session() -> Session {
        Session::new(
            Catalog::new(vec![
                Item::new("Tart", "Pie", "5.00".parse().expect("price")),
                Item::new("Cake", "Cake", "3.50".parse().expect("price")),
            ])
            .expect("catalog"),
        )
    }

    fn add(name: &str) -> UiEvent {
        Intent::AddToCart {
            name: name.to_string(),
        }
        .into()
    }

    #[test]
    fn applies_queued_intents_in_order() {
        let mut session = session();
        let mut banner = None;

        let changed = apply_ui_events(
            &mut session,
            [add("Tart"), add("Tart"), Intent::ConfirmOrder.into()],
            &mut banner,
        );

        assert!(changed);
        assert!(banner.is_none());
        assert_eq!(session.overlay_state(), OverlayState::Visible);
        assert_eq!(session.total_item_count(), 2);
    }

    #[test]
    fn rejected_intent_sets_banner_and_later_intents_still_apply() {
        let mut session = session();
        let mut banner = None;

        apply_ui_events(
            &mut session,
            [Intent::ConfirmOrder.into(), add("Cake")],
            &mut banner,
        );

        assert_eq!(session.total_item_count(), 1);
        assert!(banner.is_none(), "successful intent clears the banner");

        apply_ui_events(&mut session, [add("Pavlova")], &mut banner);
        let err = banner.clone().expect("banner");
        assert_eq!(err.category(), UiErrorCategory::Catalog);

        assert!(apply_ui_events(
            &mut session,
            [UiEvent::DismissBanner],
            &mut banner
        ));
        assert!(banner.is_none());
        assert!(!apply_ui_events(
            &mut session,
            [UiEvent::DismissBanner],
            &mut banner
        ));
    }

    #[test]
    fn start_new_order_closes_overlay_and_empties_cart() {
        let mut session = session();
        let mut banner = None;

        apply_ui_events(
            &mut session,
            [
                add("Tart"),
                Intent::ConfirmOrder.into(),
                Intent::StartNewOrder.into(),
            ],
            &mut banner,
        );

        assert_eq!(session.overlay_state(), OverlayState::Hidden);
        assert_eq!(session.total_item_count(), 0);
    }
}
