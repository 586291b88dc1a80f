use crate::actor_framework::Response;
use crate::cart::CartSummary;
use crate::catalog::{CategorySummary, ProductListing};
use crate::domain::{CategoryCreate, Credentials, Product, ProductCreate, ProductPatch, Transaction, TransactionId};
use crate::error::MarketError;
use crate::marketplace::Receipt;
use crate::session::SessionToken;

/// Reply channel carried by every request.
pub type MarketResponse<T> = Response<T, MarketError>;

/// Typed messages for the market actor. Each variant carries its parameters
/// and a oneshot channel for the reply.
#[derive(Debug)]
pub enum MarketRequest {
    // Sessions
    LoginCustomer {
        credentials: Credentials,
        respond_to: MarketResponse<SessionToken>,
    },
    LoginAdmin {
        credentials: Credentials,
        respond_to: MarketResponse<SessionToken>,
    },
    Logout {
        token: SessionToken,
        respond_to: MarketResponse<()>,
    },

    // Catalog browsing
    BrowseCatalog {
        token: SessionToken,
        respond_to: MarketResponse<Vec<ProductListing>>,
    },
    ProductDetails {
        token: SessionToken,
        product_id: String,
        respond_to: MarketResponse<ProductListing>,
    },

    // Cart
    AddToCart {
        token: SessionToken,
        product_id: String,
        quantity: i64,
        respond_to: MarketResponse<CartSummary>,
    },
    RemoveFromCart {
        token: SessionToken,
        product_id: String,
        respond_to: MarketResponse<CartSummary>,
    },
    UpdateCartQuantity {
        token: SessionToken,
        product_id: String,
        quantity: i64,
        respond_to: MarketResponse<CartSummary>,
    },
    ViewCart {
        token: SessionToken,
        respond_to: MarketResponse<CartSummary>,
    },
    ClearCart {
        token: SessionToken,
        respond_to: MarketResponse<()>,
    },

    // Checkout and payments
    Checkout {
        token: SessionToken,
        payment_method: String,
        respond_to: MarketResponse<Receipt>,
    },
    GetTransaction {
        token: SessionToken,
        transaction_id: TransactionId,
        respond_to: MarketResponse<Transaction>,
    },
    OrderHistory {
        token: SessionToken,
        respond_to: MarketResponse<Vec<Transaction>>,
    },

    // Administration
    AddProduct {
        token: SessionToken,
        payload: ProductCreate,
        respond_to: MarketResponse<String>,
    },
    UpdateProduct {
        token: SessionToken,
        product_id: String,
        patch: ProductPatch,
        respond_to: MarketResponse<Product>,
    },
    DeleteProduct {
        token: SessionToken,
        product_id: String,
        respond_to: MarketResponse<()>,
    },
    AddCategory {
        token: SessionToken,
        payload: CategoryCreate,
        respond_to: MarketResponse<String>,
    },
    DeleteCategory {
        token: SessionToken,
        category_id: String,
        respond_to: MarketResponse<()>,
    },
    ListProducts {
        token: SessionToken,
        respond_to: MarketResponse<Vec<ProductListing>>,
    },
    ListCategories {
        token: SessionToken,
        respond_to: MarketResponse<Vec<CategorySummary>>,
    },

    Shutdown,
}
