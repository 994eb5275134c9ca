use anyhow::{Context, Result};
use shared::{config::Config, utils::init_logger};
use storefront::state::AppState;
use tracing::{error, info, warn};

/// Dev harness: wires the full dependency graph against the configured API
/// and runs a small browse flow so the plumbing can be exercised end to end.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger("storefront");

    let config = Config::init().context("Failed to load configuration")?;
    let state = AppState::new(config).context("Failed to create AppState")?;

    info!("✅ Storefront client initialized");

    let notifier = state.di_container.notifier.clone();
    tokio::spawn(async move {
        let mut notifications = notifier.subscribe();
        while let Ok(notification) = notifications.recv().await {
            info!(
                "🔔 [{:?}] {} {}",
                notification.level,
                notification.message,
                notification.description.as_deref().unwrap_or_default()
            );
        }
    });

    match state.di_container.catalog.recents().await {
        Ok(products) => {
            info!("🧶 {} recent products", products.len());
            for product in products.iter().take(5) {
                info!("  - {} ({})", product.title, product.brand);
            }
        }
        Err(e) => warn!("Failed to fetch recent products: {e}"),
    }

    if let Err(e) = state.di_container.carts.open_cart().await {
        warn!("Cart not available: {e}");
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }

    info!("🛑 Shutting down");
    Ok(())
}
