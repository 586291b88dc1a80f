//! # Mock Framework
//!
//! Utilities for testing clients without a running actor.
//!
//! [`create_mock_client`] hands back a client together with the receiving
//! end of its channel. The `expect_*` helpers pull the next request off that
//! channel, assert its variant, and return its fields plus the reply sender so
//! the test can play the actor's part.

use tokio::sync::mpsc;

use crate::domain::{Credentials, ProductCreate};
use crate::messages::{MarketRequest, MarketResponse};
use crate::session::SessionToken;

/// Creates any market client over a channel the test controls.
pub fn create_mock_client<C>(
    buffer_size: usize,
    new: impl FnOnce(mpsc::Sender<MarketRequest>) -> C,
) -> (C, mpsc::Receiver<MarketRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (new(sender), receiver)
}

pub async fn expect_login_customer(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(Credentials, MarketResponse<SessionToken>)> {
    match receiver.recv().await {
        Some(MarketRequest::LoginCustomer { credentials, respond_to }) => Some((credentials, respond_to)),
        _ => None,
    }
}

pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(SessionToken, String, i64, MarketResponse<crate::cart::CartSummary>)> {
    match receiver.recv().await {
        Some(MarketRequest::AddToCart { token, product_id, quantity, respond_to }) => {
            Some((token, product_id, quantity, respond_to))
        }
        _ => None,
    }
}

pub async fn expect_checkout(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(SessionToken, String, MarketResponse<crate::marketplace::Receipt>)> {
    match receiver.recv().await {
        Some(MarketRequest::Checkout { token, payment_method, respond_to }) => Some((token, payment_method, respond_to)),
        _ => None,
    }
}

pub async fn expect_add_product(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(SessionToken, ProductCreate, MarketResponse<String>)> {
    match receiver.recv().await {
        Some(MarketRequest::AddProduct { token, payload, respond_to }) => Some((token, payload, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartSummary;
    use crate::clients::{AdminClient, CartClient, CheckoutClient, SessionClient};
    use crate::error::{CheckoutError, ErrorKind, MarketError};
    use crate::seed::seed_demo_data;
    use crate::Marketplace;

    /// A real token, since tokens can only be minted by a login.
    fn token() -> SessionToken {
        let mut market = Marketplace::new();
        seed_demo_data(&mut market).unwrap();
        market.login_customer(&Credentials::new("john_doe", "password123")).unwrap()
    }

    #[tokio::test]
    async fn test_mock_session_client() {
        let (client, mut receiver) = create_mock_client(10, SessionClient::new);
        let expected = token();

        let login_task = tokio::spawn(async move {
            client.login_customer(Credentials::new("john_doe", "password123")).await
        });

        let (credentials, responder) = expect_login_customer(&mut receiver).await.expect("Expected LoginCustomer");
        assert_eq!(credentials.username, "john_doe");
        responder.send(Ok(expected)).unwrap();

        assert_eq!(login_task.await.unwrap(), Ok(expected));
    }

    #[tokio::test]
    async fn test_mock_cart_client_forwards_arguments() {
        let (client, mut receiver) = create_mock_client(10, CartClient::new);
        let token = token();

        let task = tokio::spawn(async move { client.add_to_cart(token, "prod1".into(), 3).await });

        let (sent_token, product_id, quantity, responder) =
            expect_add_to_cart(&mut receiver).await.expect("Expected AddToCart");
        assert_eq!(sent_token, token);
        assert_eq!(product_id, "prod1");
        assert_eq!(quantity, 3);
        responder.send(Ok(CartSummary::empty())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(CartSummary::empty()));
    }

    #[tokio::test]
    async fn test_mock_checkout_relays_errors() {
        let (client, mut receiver) = create_mock_client(10, CheckoutClient::new);
        let token = token();

        let task = tokio::spawn(async move { client.checkout(token, "UPI".into()).await });

        let (_, method, responder) = expect_checkout(&mut receiver).await.expect("Expected Checkout");
        assert_eq!(method, "UPI");
        responder.send(Err(CheckoutError::EmptyCart.into())).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCart);
    }

    #[tokio::test]
    async fn test_mock_admin_client_payload() {
        let (client, mut receiver) = create_mock_client(10, AdminClient::new);
        let token = token();

        let task = tokio::spawn(async move {
            let payload = ProductCreate {
                name: "Kite".into(),
                price: 250.0,
                category_id: "cat1".into(),
                description: String::new(),
                stock: 4,
            };
            client.add_product(token, payload).await
        });

        let (_, payload, responder) = expect_add_product(&mut receiver).await.expect("Expected AddProduct");
        assert_eq!(payload.name, "Kite");
        assert_eq!(payload.stock, 4);
        responder.send(Ok("prod6".to_string())).unwrap();

        assert_eq!(task.await.unwrap(), Ok("prod6".to_string()));
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client(1, CartClient::new);
        drop(receiver);

        let err = client.view_cart(token()).await.unwrap_err();
        assert!(matches!(err, MarketError::ActorCommunicationError(_)));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_dropped_reply_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(1, CartClient::new);
        let task = tokio::spawn(async move { client.clear_cart(token()).await });

        let request = receiver.recv().await.expect("Expected a request");
        assert!(matches!(request, MarketRequest::ClearCart { .. }));
        drop(request);

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, MarketError::ActorCommunicationError(_)));
    }
}
