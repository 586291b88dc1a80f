//! Typed async handles to the market actor, one per area of the API.

#[macro_use]
mod macros;

mod admin_client;
mod cart_client;
mod catalog_client;
mod checkout_client;
mod session_client;

pub use admin_client::AdminClient;
pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use checkout_client::CheckoutClient;
pub use session_client::SessionClient;
