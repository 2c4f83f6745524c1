//! Lists recent orders of every shop of the account.
//!
//! Reads the token from `PRINTIFY_API_TOKEN`.
//!
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example orders --features orders,shops,tracing
//! ```

use printify_client_sdk::Client;
use printify_client_sdk::orders::types::{OrderStatus, OrdersRequest};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::default().authenticate_from_env()?;

    for shop in client.shops().list().await? {
        info!(endpoint = "shops", id = shop.id, title = %shop.title, channel = %shop.sales_channel);

        let request = OrdersRequest::builder()
            .limit(5)
            .status(OrderStatus::OnHold)
            .build();

        match client.orders().list(shop.id, &request).await {
            Ok(orders) => {
                for order in orders {
                    info!(
                        endpoint = "orders",
                        shop = shop.id,
                        id = %order.id,
                        status = %order.status,
                        total = order.total_price,
                        items = order.line_items.len()
                    );
                }
            }
            Err(e) => error!(endpoint = "orders", shop = shop.id, error = %e),
        }
    }

    Ok(())
}
