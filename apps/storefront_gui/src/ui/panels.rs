//! Widgets for the product grid, the cart panel, and the confirmation overlay.
//! Every click becomes a queued [`UiEvent`]; nothing here touches the session.

use cart_core::{
    CardControl, CartLineView, CartPanelBody, CartPanelView, Intent, ItemCardView, OverlayView,
};
use eframe::egui;

use crate::{
    controller::events::{err_label, UiError, UiEvent},
    ui::theme::Palette,
};

#[derive(Debug, Clone, Copy)]
pub struct StorefrontLayout {
    pub card_width: f32,
    pub card_image_height: f32,
    pub grid_spacing: f32,
    pub max_columns: usize,
    pub cart_panel_width: f32,
    /// Space kept below the cart's line list for the total and confirm button.
    pub cart_footer_height: f32,
    pub overlay_width: f32,
    pub pill_radius: u8,
}

impl Default for StorefrontLayout {
    fn default() -> Self {
        Self {
            card_width: 240.0,
            card_image_height: 180.0,
            grid_spacing: 20.0,
            max_columns: 3,
            cart_panel_width: 340.0,
            cart_footer_height: 200.0,
            overlay_width: 480.0,
            pill_radius: 20,
        }
    }
}

pub fn columns_for_width(available_width: f32, layout: &StorefrontLayout) -> usize {
    let per_card = layout.card_width + layout.grid_spacing;
    let fit = ((available_width + layout.grid_spacing) / per_card).floor();
    (fit.max(1.0) as usize).min(layout.max_columns.max(1))
}

pub fn cart_lines_max_height(available_height: f32, layout: &StorefrontLayout) -> f32 {
    (available_height - layout.cart_footer_height).max(0.0)
}

pub fn item_card(
    ui: &mut egui::Ui,
    card: &ItemCardView,
    layout: &StorefrontLayout,
    colors: &Palette,
    events: &mut Vec<UiEvent>,
) {
    ui.vertical(|ui| {
        ui.set_width(layout.card_width);

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(layout.card_width, layout.card_image_height),
            egui::Sense::hover(),
        );
        let stroke = if card.selected {
            egui::Stroke::new(2.0, colors.accent)
        } else {
            egui::Stroke::new(1.0, colors.border)
        };
        ui.painter().rect(
            rect,
            egui::CornerRadius::same(10),
            colors.card_placeholder,
            stroke,
            egui::StrokeKind::Inside,
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &card.category,
            egui::FontId::proportional(18.0),
            colors.text_muted,
        );
        response.on_hover_text(card.image.desktop.as_str());

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(layout.card_width * 0.2);
            card_control(ui, card, layout, colors, events);
        });

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(&card.category)
                .size(13.0)
                .color(colors.text_muted),
        );
        ui.label(
            egui::RichText::new(&card.name)
                .strong()
                .color(colors.text_strong),
        );
        ui.label(
            egui::RichText::new(&card.price_label)
                .strong()
                .color(colors.accent),
        );
    });
}

fn card_control(
    ui: &mut egui::Ui,
    card: &ItemCardView,
    layout: &StorefrontLayout,
    colors: &Palette,
    events: &mut Vec<UiEvent>,
) {
    let pill = egui::CornerRadius::same(layout.pill_radius);
    let pill_size = egui::vec2(layout.card_width * 0.6, 36.0);

    match card.control {
        CardControl::AddToCart => {
            let button = egui::Button::new(
                egui::RichText::new("Add to Cart")
                    .strong()
                    .color(colors.text_strong),
            )
            .fill(colors.panel_background)
            .stroke(egui::Stroke::new(1.0, colors.border))
            .corner_radius(pill)
            .min_size(pill_size);
            if ui.add(button).clicked() {
                events.push(
                    Intent::AddToCart {
                        name: card.name.clone(),
                    }
                    .into(),
                );
            }
        }
        CardControl::Stepper { quantity } => {
            egui::Frame::new()
                .fill(colors.accent)
                .corner_radius(pill)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.set_min_size(pill_size - egui::vec2(20.0, 8.0));
                    ui.horizontal_centered(|ui| {
                        if ui
                            .add(step_button("-", colors))
                            .on_hover_text("Decrease quantity")
                            .clicked()
                        {
                            events.push(
                                Intent::Decrement {
                                    name: card.name.clone(),
                                }
                                .into(),
                            );
                        }
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new(quantity.to_string())
                                .strong()
                                .color(colors.accent_text),
                        );
                        ui.add_space(16.0);
                        if ui
                            .add(step_button("+", colors))
                            .on_hover_text("Increase quantity")
                            .clicked()
                        {
                            events.push(
                                Intent::Increment {
                                    name: card.name.clone(),
                                }
                                .into(),
                            );
                        }
                    });
                });
        }
    }
}

fn step_button(symbol: &str, colors: &Palette) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(symbol.to_string())
            .strong()
            .color(colors.accent_text),
    )
    .fill(colors.accent)
    .stroke(egui::Stroke::new(1.0, colors.accent_text))
    .corner_radius(egui::CornerRadius::same(10))
    .min_size(egui::vec2(20.0, 20.0))
}

pub fn cart_panel(
    ui: &mut egui::Ui,
    panel: &CartPanelView,
    layout: &StorefrontLayout,
    colors: &Palette,
    events: &mut Vec<UiEvent>,
) {
    ui.label(
        egui::RichText::new(&panel.title)
            .size(22.0)
            .strong()
            .color(colors.accent),
    );
    ui.add_space(12.0);

    match &panel.body {
        CartPanelBody::Empty { message } => {
            ui.vertical_centered(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(100.0, 100.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 40.0, colors.card_placeholder);
                ui.painter().circle_filled(
                    rect.center() + egui::vec2(0.0, 6.0),
                    18.0,
                    colors.text_muted,
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(message)
                        .strong()
                        .color(colors.text_muted),
                );
            });
        }
        CartPanelBody::Filled {
            lines,
            total_label,
            delivery_note,
        } => {
            egui::ScrollArea::vertical()
                .id_salt("cart_lines")
                .max_height(cart_lines_max_height(ui.available_height(), layout))
                .show(ui, |ui| {
                    for line in lines {
                        cart_line_row(ui, line, colors, Some(&mut *events));
                        ui.separator();
                    }
                });

            order_total_row(ui, total_label, colors);
            ui.add_space(12.0);

            egui::Frame::new()
                .fill(colors.subtle_fill)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("●").color(colors.success));
                        ui.label(egui::RichText::new(delivery_note).size(13.0));
                    });
                });
            ui.add_space(12.0);

            let confirm = egui::Button::new(
                egui::RichText::new("Confirm Order")
                    .strong()
                    .color(colors.accent_text),
            )
            .fill(colors.accent)
            .corner_radius(egui::CornerRadius::same(layout.pill_radius));
            if ui
                .add_sized([ui.available_width(), 44.0], confirm)
                .clicked()
            {
                events.push(Intent::ConfirmOrder.into());
            }
        }
    }
}

/// One cart row. Passing `events` adds the remove control.
fn cart_line_row(
    ui: &mut egui::Ui,
    line: &CartLineView,
    colors: &Palette,
    events: Option<&mut Vec<UiEvent>>,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&line.name)
                    .strong()
                    .color(colors.text_strong),
            );
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&line.quantity_label)
                        .strong()
                        .color(colors.accent),
                );
                ui.label(egui::RichText::new(&line.unit_price_label).color(colors.text_muted));
                if events.is_some() {
                    ui.label(egui::RichText::new(&line.subtotal_label).strong());
                }
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match events {
            Some(events) => {
                let remove = egui::Button::new(egui::RichText::new("x").color(colors.text_muted))
                    .stroke(egui::Stroke::new(1.0, colors.border))
                    .corner_radius(egui::CornerRadius::same(10))
                    .min_size(egui::vec2(20.0, 20.0));
                if ui.add(remove).on_hover_text("Remove item").clicked() {
                    events.push(
                        Intent::Remove {
                            name: line.name.clone(),
                        }
                        .into(),
                    );
                }
            }
            None => {
                ui.label(egui::RichText::new(&line.subtotal_label).strong());
            }
        });
    });
}

fn order_total_row(ui: &mut egui::Ui, total_label: &str, colors: &Palette) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Order Total").color(colors.text_strong));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(total_label)
                    .size(24.0)
                    .strong()
                    .color(colors.text_strong),
            );
        });
    });
}

pub fn order_overlay(
    ctx: &egui::Context,
    overlay: &OverlayView,
    layout: &StorefrontLayout,
    colors: &Palette,
    events: &mut Vec<UiEvent>,
) {
    egui::Modal::new(egui::Id::new("order_confirmation")).show(ctx, |ui| {
        ui.set_width(layout.overlay_width);

        ui.label(
            egui::RichText::new("✔")
                .size(32.0)
                .color(colors.success),
        );
        ui.label(
            egui::RichText::new(&overlay.title)
                .size(32.0)
                .strong()
                .color(colors.text_strong),
        );
        ui.label(egui::RichText::new(&overlay.subtitle).color(colors.text_muted));
        ui.add_space(16.0);

        egui::Frame::new()
            .fill(colors.subtle_fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(16, 12))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("confirmed_lines")
                    .max_height(280.0)
                    .show(ui, |ui| {
                        for line in &overlay.lines {
                            cart_line_row(ui, line, colors, None);
                            ui.separator();
                        }
                    });
                order_total_row(ui, &overlay.total_label, colors);
            });
        ui.add_space(16.0);

        let start_over = egui::Button::new(
            egui::RichText::new("Start New Order")
                .strong()
                .color(colors.accent_text),
        )
        .fill(colors.accent)
        .corner_radius(egui::CornerRadius::same(layout.pill_radius));
        if ui
            .add_sized([ui.available_width(), 44.0], start_over)
            .clicked()
        {
            events.push(Intent::StartNewOrder.into());
        }
    });
}

pub fn status_banner(
    ui: &mut egui::Ui,
    banner: &UiError,
    colors: &Palette,
    events: &mut Vec<UiEvent>,
) {
    egui::Frame::new()
        .fill(colors.banner_fill)
        .stroke(egui::Stroke::new(1.0, colors.banner_stroke))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        err_label(banner.category()),
                        banner.message()
                    ))
                    .color(colors.text_strong),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        events.push(UiEvent::DismissBanner);
                    }
                });
            });
        });
}
