//! Catalog explorer.
//!
//! Walks the catalog from the first blueprint down to its variants and shipping rates. Reads the
//! token from `PRINTIFY_API_TOKEN`.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example catalog --features catalog,tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=catalog.log RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example catalog --features catalog,tracing
//! ```

use std::fs::File;

use printify_client_sdk::Client;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default().authenticate_from_env()?;
    let catalog = client.catalog();

    let blueprints = catalog.blueprints().await?;
    info!(endpoint = "blueprints", count = blueprints.len());

    let Some(blueprint) = blueprints.first() else {
        warn!(endpoint = "blueprints", "catalog is empty");
        return Ok(());
    };
    info!(
        endpoint = "blueprints",
        id = blueprint.id,
        title = %blueprint.title,
        brand = %blueprint.brand
    );

    let providers = catalog.blueprint_print_providers(blueprint.id).await?;
    info!(endpoint = "blueprint_print_providers", count = providers.len());

    for provider in providers.iter().take(3) {
        match catalog.variants(blueprint.id, provider.id).await {
            Ok(variants) => info!(
                endpoint = "variants",
                provider = %provider.title,
                count = variants.len()
            ),
            Err(e) => error!(endpoint = "variants", provider = provider.id, error = %e),
        }

        match catalog.shipping(blueprint.id, provider.id).await {
            Ok(Some(shipping)) => {
                for profile in &shipping.profiles {
                    info!(
                        endpoint = "shipping",
                        provider = %provider.title,
                        countries = ?profile.countries,
                        first_item = %profile.first_item.cost,
                        currency = %profile.first_item.currency
                    );
                }
            }
            Ok(None) => warn!(endpoint = "shipping", provider = provider.id, "no rates"),
            Err(e) => error!(endpoint = "shipping", provider = provider.id, error = %e),
        }
    }

    Ok(())
}
