use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::error::MarketError;
use crate::marketplace::Marketplace;
use crate::messages::{MarketRequest, MarketResponse};

// =============================================================================
// MARKET ACTOR
// =============================================================================

/// Sole owner of the [`Marketplace`].
///
/// Requests are handled one at a time in arrival order, so a checkout's
/// stock re-validation and its stock debit can never interleave with another
/// request.
pub struct MarketActor {
    receiver: mpsc::Receiver<MarketRequest>,
    market: Marketplace,
}

impl MarketActor {
    pub fn new(buffer_size: usize, market: Marketplace) -> (Self, mpsc::Sender<MarketRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, market }, sender)
    }

    #[instrument(name = "market_actor", skip(self))]
    pub async fn run(mut self) {
        info!("MarketActor starting");
        while let Some(msg) = self.receiver.recv().await {
            if !self.handle(msg) {
                info!("MarketActor shutting down");
                break;
            }
        }
        info!("MarketActor stopped");
    }

    /// Dispatches one request. Returns `false` on shutdown.
    fn handle(&mut self, msg: MarketRequest) -> bool {
        let market = &mut self.market;
        match msg {
            MarketRequest::LoginCustomer { credentials, respond_to } => {
                reply("login_customer", respond_to, market.login_customer(&credentials));
            }
            MarketRequest::LoginAdmin { credentials, respond_to } => {
                reply("login_admin", respond_to, market.login_admin(&credentials));
            }
            MarketRequest::Logout { token, respond_to } => {
                market.logout(&token);
                reply("logout", respond_to, Ok(()));
            }
            MarketRequest::BrowseCatalog { token, respond_to } => {
                reply("browse_catalog", respond_to, market.browse_catalog(&token));
            }
            MarketRequest::ProductDetails { token, product_id, respond_to } => {
                reply("product_details", respond_to, market.product_details(&token, &product_id));
            }
            MarketRequest::AddToCart { token, product_id, quantity, respond_to } => {
                reply("add_to_cart", respond_to, market.add_to_cart(&token, &product_id, quantity));
            }
            MarketRequest::RemoveFromCart { token, product_id, respond_to } => {
                reply("remove_from_cart", respond_to, market.remove_from_cart(&token, &product_id));
            }
            MarketRequest::UpdateCartQuantity { token, product_id, quantity, respond_to } => {
                let result = market.update_cart_quantity(&token, &product_id, quantity);
                reply("update_cart_quantity", respond_to, result);
            }
            MarketRequest::ViewCart { token, respond_to } => {
                reply("view_cart", respond_to, market.view_cart(&token));
            }
            MarketRequest::ClearCart { token, respond_to } => {
                reply("clear_cart", respond_to, market.clear_cart(&token));
            }
            MarketRequest::Checkout { token, payment_method, respond_to } => {
                reply("checkout", respond_to, market.checkout(&token, &payment_method));
            }
            MarketRequest::GetTransaction { token, transaction_id, respond_to } => {
                reply("get_transaction", respond_to, market.get_transaction(&token, transaction_id));
            }
            MarketRequest::OrderHistory { token, respond_to } => {
                reply("order_history", respond_to, market.order_history(&token));
            }
            MarketRequest::AddProduct { token, payload, respond_to } => {
                reply("add_product", respond_to, market.add_product(&token, payload));
            }
            MarketRequest::UpdateProduct { token, product_id, patch, respond_to } => {
                reply("update_product", respond_to, market.update_product(&token, &product_id, patch));
            }
            MarketRequest::DeleteProduct { token, product_id, respond_to } => {
                reply("delete_product", respond_to, market.delete_product(&token, &product_id));
            }
            MarketRequest::AddCategory { token, payload, respond_to } => {
                reply("add_category", respond_to, market.add_category(&token, payload));
            }
            MarketRequest::DeleteCategory { token, category_id, respond_to } => {
                reply("delete_category", respond_to, market.delete_category(&token, &category_id));
            }
            MarketRequest::ListProducts { token, respond_to } => {
                reply("list_products", respond_to, market.list_products(&token));
            }
            MarketRequest::ListCategories { token, respond_to } => {
                reply("list_categories", respond_to, market.list_categories(&token));
            }
            MarketRequest::Shutdown => return false,
        }
        true
    }
}

fn reply<T>(operation: &'static str, respond_to: MarketResponse<T>, result: Result<T, MarketError>) {
    match &result {
        Ok(_) => debug!(operation, "Request handled"),
        Err(e) => warn!(operation, kind = ?e.kind(), error = %e, "Request rejected"),
    }
    if respond_to.send(result).is_err() {
        debug!(operation, "Requester dropped before reply");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Credentials;
    use crate::error::ErrorKind;
    use crate::seed::seed_demo_data;
    use tokio::sync::oneshot;

    fn spawn_seeded() -> (mpsc::Sender<MarketRequest>, tokio::task::JoinHandle<()>) {
        let mut market = Marketplace::new();
        seed_demo_data(&mut market).unwrap();
        let (actor, sender) = MarketActor::new(8, market);
        (sender, tokio::spawn(actor.run()))
    }

    #[tokio::test]
    async fn test_actor_answers_and_stops() {
        let (sender, handle) = spawn_seeded();

        let (respond_to, response) = oneshot::channel();
        sender
            .send(MarketRequest::LoginCustomer {
                credentials: Credentials::new("john_doe", "password123"),
                respond_to,
            })
            .await
            .unwrap();
        let token = response.await.unwrap().unwrap();

        let (respond_to, response) = oneshot::channel();
        sender.send(MarketRequest::BrowseCatalog { token, respond_to }).await.unwrap();
        assert_eq!(response.await.unwrap().unwrap().len(), 5);

        sender.send(MarketRequest::Shutdown).await.unwrap();
        handle.await.unwrap();
        assert!(sender.is_closed());
    }

    #[tokio::test]
    async fn test_actor_relays_errors() {
        let (sender, handle) = spawn_seeded();

        let (respond_to, response) = oneshot::channel();
        sender
            .send(MarketRequest::LoginAdmin {
                credentials: Credentials::new("admin", "wrong"),
                respond_to,
            })
            .await
            .unwrap();
        let err = response.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);

        drop(sender);
        handle.await.unwrap();
    }
}
