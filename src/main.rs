use anyhow::{Context, Result};
use tracing::{error, info, Instrument};

use marketplace::domain::{CategoryCreate, Credentials, ProductCreate};
use marketplace::{setup_tracing, MarketConfig, MarketSystem};

#[tokio::main]
async fn main() -> Result<()> {
    let config = MarketConfig::from_env().context("reading marketplace configuration")?;
    setup_tracing(&config);

    info!("Starting marketplace");
    let system = MarketSystem::new(&config).context("starting market system")?;

    let span = tracing::info_span!("customer_session", username = "john_doe");
    async {
        let token = system
            .session_client
            .login_customer(Credentials::new("john_doe", "password123"))
            .await
            .context("customer login")?;

        for listing in system.catalog_client.browse_catalog(token).await? {
            info!(
                product_id = %listing.product.id,
                name = %listing.product.name,
                price = listing.product.price,
                stock = listing.product.stock,
                category = %listing.category_name,
                "Available"
            );
        }

        system.cart_client.add_to_cart(token, "prod3".into(), 2).await?;
        let summary = system.cart_client.add_to_cart(token, "prod5".into(), 1).await?;
        info!(items = summary.item_count, total = summary.total_amount, "Cart ready");

        // Rejected: more than the store has.
        if let Err(e) = system.cart_client.add_to_cart(token, "prod2".into(), 50).await {
            info!(error = %e, "Add to cart refused");
        }

        let receipt = system
            .checkout_client
            .checkout(token, "UPI".into())
            .await
            .context("checkout")?;
        info!(transaction_id = %receipt.transaction_id, "{}", receipt.message);

        let history = system.checkout_client.order_history(token).await?;
        info!(orders = history.len(), "Order history loaded");

        system.session_client.logout(token).await?;
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("admin_session", username = "admin");
    let admin_result = async {
        let token = system
            .session_client
            .login_admin(Credentials::new("admin", "admin123"))
            .await
            .context("admin login")?;

        let category_id = system
            .admin_client
            .add_category(
                token,
                CategoryCreate {
                    name: "Toys".into(),
                    description: "Games and toys".into(),
                },
            )
            .await?;
        let product_id = system
            .admin_client
            .add_product(
                token,
                ProductCreate {
                    name: "Board Game".into(),
                    price: 1200.0,
                    category_id,
                    description: "Family board game".into(),
                    stock: 6,
                },
            )
            .await?;
        info!(%product_id, "Product added");

        for summary in system.admin_client.list_categories(token).await? {
            info!(
                category = %summary.category.name,
                active_products = summary.active_products,
                active = summary.category.is_active(),
                "Category"
            );
        }

        system.session_client.logout(token).await?;
        anyhow::Ok(())
    }
    .instrument(span)
    .await;

    if let Err(e) = admin_result {
        error!(error = %e, "Admin session failed");
    }

    system.shutdown().await.context("shutting down market system")?;

    info!("Marketplace demo completed");
    Ok(())
}
