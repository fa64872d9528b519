use std::path::PathBuf;

use anyhow::Context;
use cart_core::Session;
use clap::Parser;
use eframe::egui;
use shared::Catalog;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use ui::{theme::ThemePreset, StorefrontApp};

#[derive(Parser, Debug)]
#[command(about = "Dessert storefront with a shopping cart")]
struct Args {
    /// JSON catalog to load instead of the built-in dessert menu.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Settings file; defaults to ./storefront.toml when present.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long, value_enum)]
    theme: Option<ThemePreset>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut startup = config::load_settings(args.settings.as_deref())?;
    if let Some(path) = args.catalog {
        startup.catalog_path = Some(path);
    }
    if let Some(theme) = args.theme {
        startup.theme = theme;
    }

    let catalog = Catalog::load_or_embedded(startup.catalog_path.as_deref())
        .context("failed to load storefront catalog")?;
    tracing::info!(
        items = catalog.len(),
        theme = startup.theme.label(),
        "starting storefront"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dessert Storefront")
            .with_inner_size([startup.window_width, startup.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let theme = startup.theme;
    eframe::run_native(
        "Dessert Storefront",
        options,
        Box::new(move |_cc| Ok(Box::new(StorefrontApp::new(Session::new(catalog), theme)))),
    )
    .map_err(|err| anyhow::anyhow!("storefront window failed: {err}"))
}
