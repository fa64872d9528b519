use std::path::PathBuf;

use anyhow::{Context, Result};
use cart_core::{render_page, Intent, Session};
use clap::{Parser, Subcommand};
use shared::Catalog;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Browse the dessert menu and replay cart actions in the terminal")]
struct Cli {
    /// JSON catalog to load instead of the built-in dessert menu.
    #[arg(long, global = true, env = "STOREFRONT_CATALOG")]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every item with its category and price.
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Apply intents in order and print the resulting page.
    ///
    /// Intents: add:<name>, inc:<name>, dec:<name>, remove:<name>, confirm, new-order.
    Order {
        #[arg(required = true, value_name = "INTENT")]
        intents: Vec<Intent>,
        /// Stop at the first rejected intent instead of skipping it.
        #[arg(long)]
        strict: bool,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let catalog = Catalog::load_or_embedded(cli.catalog.as_deref()).with_context(|| {
        match &cli.catalog {
            Some(path) => format!("failed to load catalog from '{}'", path.display()),
            None => "embedded catalog is invalid".to_string(),
        }
    })?;

    match cli.command {
        Command::Catalog { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.items())?);
            } else {
                print!("{}", render::catalog_listing(&catalog));
            }
        }
        Command::Order {
            intents,
            strict,
            json,
        } => {
            let mut session = Session::new(catalog);
            replay(&mut session, &intents, strict)?;

            let page = render_page(&session);
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print!("{}", render::page(&page));
            }
        }
    }

    Ok(())
}

fn replay(session: &mut Session, intents: &[Intent], strict: bool) -> Result<()> {
    for intent in intents {
        if let Err(err) = session.apply(intent) {
            if strict {
                return Err(err).with_context(|| format!("intent '{intent}' was rejected"));
            }
            tracing::debug!(%intent, error = %err, "skipping rejected intent");
            eprintln!("skipped '{intent}': {err}");
        }
    }
    Ok(())
}
