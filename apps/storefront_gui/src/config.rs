use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const DEFAULT_SETTINGS_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub catalog_path: Option<PathBuf>,
    pub theme: ThemePreset,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            theme: ThemePreset::Rose,
            window_width: 1280.0,
            window_height: 820.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    catalog_path: Option<PathBuf>,
    theme: Option<ThemePreset>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

/// Defaults, then the settings file, then `STOREFRONT_*` environment variables.
/// Command-line flags are applied on top by the caller.
pub fn load_settings(settings_file: Option<&Path>) -> anyhow::Result<StartupConfig> {
    let mut settings = StartupConfig::default();

    let path = settings_file.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
            tracing::info!(path = %path.display(), "loaded settings file");
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && settings_file.is_none() => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok())?;
    Ok(settings)
}

fn apply_file_settings(settings: &mut StartupConfig, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.theme {
        settings.theme = v;
    }
    if let Some(v) = file_cfg.window_width {
        settings.window_width = clamp_window_dimension(v);
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = clamp_window_dimension(v);
    }
}

fn apply_env_overrides(
    settings: &mut StartupConfig,
    read_var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = read_var("STOREFRONT_CATALOG").filter(|v| !v.trim().is_empty()) {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read_var("STOREFRONT_THEME").filter(|v| !v.trim().is_empty()) {
        settings.theme = ThemePreset::from_str(v.trim(), true)
            .map_err(|err| anyhow::anyhow!("invalid STOREFRONT_THEME '{v}': {err}"))?;
    }
    Ok(())
}

fn clamp_window_dimension(value: f32) -> f32 {
    value.clamp(640.0, 3840.0)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
