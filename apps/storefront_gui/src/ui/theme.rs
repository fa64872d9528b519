use eframe::egui;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Rose,
    Dark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Rose => "Rose (Light)",
            ThemePreset::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page_background: egui::Color32,
    pub panel_background: egui::Color32,
    pub card_placeholder: egui::Color32,
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub success: egui::Color32,
    pub text_strong: egui::Color32,
    pub text_muted: egui::Color32,
    pub border: egui::Color32,
    pub subtle_fill: egui::Color32,
    pub banner_fill: egui::Color32,
    pub banner_stroke: egui::Color32,
}

pub fn palette(preset: ThemePreset) -> Palette {
    match preset {
        ThemePreset::Rose => Palette {
            page_background: egui::Color32::from_rgb(252, 248, 246),
            panel_background: egui::Color32::WHITE,
            card_placeholder: egui::Color32::from_rgb(245, 238, 236),
            accent: egui::Color32::from_rgb(199, 58, 15),
            accent_text: egui::Color32::WHITE,
            success: egui::Color32::from_rgb(30, 165, 117),
            text_strong: egui::Color32::from_rgb(38, 15, 8),
            text_muted: egui::Color32::from_rgb(173, 137, 133),
            border: egui::Color32::from_rgb(202, 175, 167),
            subtle_fill: egui::Color32::from_rgb(252, 248, 246),
            banner_fill: egui::Color32::from_rgb(253, 226, 218),
            banner_stroke: egui::Color32::from_rgb(199, 58, 15),
        },
        ThemePreset::Dark => Palette {
            page_background: egui::Color32::from_rgb(26, 22, 21),
            panel_background: egui::Color32::from_rgb(38, 32, 30),
            card_placeholder: egui::Color32::from_rgb(56, 46, 43),
            accent: egui::Color32::from_rgb(232, 96, 54),
            accent_text: egui::Color32::WHITE,
            success: egui::Color32::from_rgb(52, 199, 147),
            text_strong: egui::Color32::from_rgb(245, 238, 236),
            text_muted: egui::Color32::from_rgb(173, 137, 133),
            border: egui::Color32::from_rgb(90, 74, 70),
            subtle_fill: egui::Color32::from_rgb(48, 40, 38),
            banner_fill: egui::Color32::from_rgb(111, 53, 53),
            banner_stroke: egui::Color32::from_rgb(175, 96, 96),
        },
    }
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let colors = palette(preset);
    let mut visuals = match preset {
        ThemePreset::Rose => egui::Visuals::light(),
        ThemePreset::Dark => egui::Visuals::dark(),
    };

    visuals.override_text_color = Some(colors.text_strong);
    visuals.panel_fill = colors.page_background;
    visuals.window_fill = colors.panel_background;
    visuals.extreme_bg_color = colors.panel_background;
    visuals.faint_bg_color = colors.subtle_fill;
    visuals.hyperlink_color = colors.accent;
    visuals.selection.bg_fill = colors.accent;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors.accent);
    visuals.widgets.active.bg_fill = colors.accent;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rose_is_the_default_light_theme() {
        assert_eq!(ThemePreset::default(), ThemePreset::Rose);
        assert!(!visuals_for_theme(ThemePreset::Rose).dark_mode);
        assert!(visuals_for_theme(ThemePreset::Dark).dark_mode);
    }

    #[test]
    fn accent_drives_selection_color() {
        let visuals = visuals_for_theme(ThemePreset::Rose);
        assert_eq!(visuals.selection.bg_fill, palette(ThemePreset::Rose).accent);
    }
}
