use tokio::task::JoinHandle;
use tracing::{error, info};

use super::MarketConfig;
use crate::actors::MarketActor;
use crate::clients::{AdminClient, CartClient, CatalogClient, CheckoutClient, SessionClient};
use crate::error::MarketError;
use crate::marketplace::Marketplace;
use crate::messages::MarketRequest;
use crate::seed::seed_demo_data;

/// The running marketplace: one actor owning all state, plus typed clients.
///
/// Responsible for seeding, starting the actor and shutting it down. Clients
/// are cheap to clone and may be handed to any number of tasks.
pub struct MarketSystem {
    pub session_client: SessionClient,
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub checkout_client: CheckoutClient,
    pub admin_client: AdminClient,
    sender: tokio::sync::mpsc::Sender<MarketRequest>,
    handle: JoinHandle<()>,
}

impl MarketSystem {
    /// Starts the actor with a fresh marketplace, seeded per `config`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: &MarketConfig) -> Result<Self, MarketError> {
        let mut market = Marketplace::new();
        if config.seed_demo_data {
            seed_demo_data(&mut market)?;
        }
        Ok(Self::with_market(config.buffer_size, market))
    }

    /// Starts the actor over an already populated marketplace.
    pub fn with_market(buffer_size: usize, market: Marketplace) -> Self {
        let (actor, sender) = MarketActor::new(buffer_size, market);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size, "Market system started");

        Self {
            session_client: SessionClient::new(sender.clone()),
            catalog_client: CatalogClient::new(sender.clone()),
            cart_client: CartClient::new(sender.clone()),
            checkout_client: CheckoutClient::new(sender.clone()),
            admin_client: AdminClient::new(sender.clone()),
            sender,
            handle,
        }
    }

    /// Asks the actor to stop and waits for it. Requests already queued
    /// ahead of the shutdown are still answered.
    pub async fn shutdown(self) -> Result<(), MarketError> {
        info!("Shutting down system...");
        if self.sender.send(MarketRequest::Shutdown).await.is_err() {
            info!("Actor already stopped");
        }

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(MarketError::ActorCommunicationError(format!("Actor task failed: {e}")));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
