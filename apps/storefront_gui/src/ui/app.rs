use cart_core::{render_page, PageView, Session};
use eframe::egui;

use crate::controller::{
    events::{UiError, UiEvent},
    orchestration::apply_ui_events,
};
use crate::ui::{
    panels::{self, StorefrontLayout},
    theme::{palette, visuals_for_theme, Palette, ThemePreset},
};

/// Composition root for the window: owns the session and everything the
/// widgets queued during the current frame.
pub struct StorefrontApp {
    session: Session,
    queued: Vec<UiEvent>,
    status_banner: Option<UiError>,
    layout: StorefrontLayout,
    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
}

impl StorefrontApp {
    pub fn new(session: Session, theme: ThemePreset) -> Self {
        Self {
            session,
            queued: Vec::new(),
            status_banner: None,
            layout: StorefrontLayout::default(),
            theme,
            applied_theme: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status_banner(&self) -> Option<&UiError> {
        self.status_banner.as_ref()
    }

    pub fn queue(&mut self, event: impl Into<UiEvent>) {
        self.queued.push(event.into());
    }

    /// Applies everything queued this frame. Returns `true` when a redraw is due.
    pub fn flush_queued(&mut self) -> bool {
        if self.queued.is_empty() {
            return false;
        }
        let events = std::mem::take(&mut self.queued);
        apply_ui_events(&mut self.session, events, &mut self.status_banner)
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.theme));
        self.applied_theme = Some(self.theme);
        tracing::debug!(theme = self.theme.label(), "applied theme");
    }

    fn show_status_banner(&mut self, ctx: &egui::Context, colors: &Palette) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        egui::TopBottomPanel::top("status_banner")
            .frame(egui::Frame::new().inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| {
                panels::status_banner(ui, &banner, colors, &mut self.queued);
            });
    }

    fn show_cart_panel(&mut self, ctx: &egui::Context, page: &PageView, colors: &Palette) {
        let layout = self.layout;
        egui::SidePanel::right("cart_panel")
            .resizable(false)
            .exact_width(layout.cart_panel_width)
            .frame(
                egui::Frame::new()
                    .fill(colors.panel_background)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                panels::cart_panel(ui, &page.cart, &layout, colors, &mut self.queued);
            });
    }

    fn show_catalog(&mut self, ctx: &egui::Context, page: &PageView, colors: &Palette) {
        let layout = self.layout;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(colors.page_background)
                    .inner_margin(egui::Margin::same(32)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&page.title)
                            .size(36.0)
                            .strong()
                            .color(colors.text_strong),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        egui::ComboBox::from_id_salt("theme_preset")
                            .selected_text(self.theme.label())
                            .show_ui(ui, |ui| {
                                for preset in [ThemePreset::Rose, ThemePreset::Dark] {
                                    ui.selectable_value(&mut self.theme, preset, preset.label());
                                }
                            });
                    });
                });
                ui.add_space(24.0);

                let columns = panels::columns_for_width(ui.available_width(), &layout);
                egui::ScrollArea::vertical()
                    .id_salt("catalog_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Grid::new("catalog_grid")
                            .num_columns(columns)
                            .spacing([layout.grid_spacing, layout.grid_spacing * 1.5])
                            .show(ui, |ui| {
                                for (index, card) in page.cards.iter().enumerate() {
                                    panels::item_card(ui, card, &layout, colors, &mut self.queued);
                                    if (index + 1) % columns == 0 {
                                        ui.end_row();
                                    }
                                }
                            });
                    });
            });
    }

    fn show_order_overlay(&mut self, ctx: &egui::Context, page: &PageView, colors: &Palette) {
        let Some(overlay) = &page.overlay else {
            return;
        };
        panels::order_overlay(ctx, overlay, &self.layout, colors, &mut self.queued);
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let page = render_page(&self.session);
        let colors = palette(self.theme);

        self.show_status_banner(ctx, &colors);
        self.show_cart_panel(ctx, &page, &colors);
        self.show_catalog(ctx, &page, &colors);
        self.show_order_overlay(ctx, &page, &colors);

        if self.flush_queued() {
            ctx.request_repaint();
        }
    }
}
