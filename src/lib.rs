//! An in-memory marketplace: catalog, per-user carts, checkout and payments,
//! served by a single actor behind typed async clients.
//!
//! Start with [`MarketSystem::new`], log in through
//! [`SessionClient`](clients::SessionClient), then drive the cart and checkout
//! clients with the returned token.

pub mod actor_framework;
pub mod actors;
pub mod app_system;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod domain;
pub mod error;
pub mod marketplace;
pub mod messages;
pub mod payment;
pub mod seed;
pub mod session;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, MarketConfig, MarketSystem};
pub use error::{ErrorKind, MarketError};
pub use marketplace::{Marketplace, Receipt};
pub use session::SessionToken;
