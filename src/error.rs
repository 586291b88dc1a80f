use thiserror::Error;

/// Coarse classification of every failure the marketplace can report.
///
/// Callers that only care about *what kind* of thing went wrong (a
/// presentation layer choosing a message, a test asserting an outcome) match
/// on this instead of the per-component error enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthenticationFailure,
    NotFound,
    ValidationFailure,
    InsufficientStock,
    EmptyCart,
    InvalidPaymentMethod,
    InvalidAmount,
    Unavailable,
}

/// Errors raised by the catalog store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(String),
    #[error("Category with ID {0} not found")]
    CategoryNotFound(String),
    #[error("Category {0} is no longer active")]
    CategoryInactive(String),
    #[error("Cannot delete category {category_id}. {active_products} products are using this category")]
    CategoryInUse { category_id: String, active_products: usize },
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock { product_id: String, requested: u32, available: u32 },
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}

/// Errors raised by cart mutations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),
    #[error("Product {name} is not available in required quantity: requested {requested}, available {available}")]
    InsufficientStock { product_id: String, name: String, requested: u64, available: u32 },
    #[error("Product {name} is not available")]
    ProductUnavailable { product_id: String, name: String },
    #[error("Product with ID {0} not found in cart")]
    ItemNotFound(String),
    #[error("Product with ID {0} not found")]
    ProductNotFound(String),
}

/// Errors raised while authorizing a payment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Invalid payment method {0:?}. Supported methods: UPI, DEBIT_CARD, NET_BANKING")]
    InvalidPaymentMethod(String),
    #[error("Payment amount must be positive, got {0:.2}")]
    InvalidAmount(f64),
}

/// Errors raised by the checkout pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cannot checkout with empty cart")]
    EmptyCart,
    #[error("Product {name} is not available in required quantity: requested {requested}, available {available}")]
    InsufficientStock { product_id: String, name: String, requested: u64, available: u32 },
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised by the session provider.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid or expired session")]
    InvalidSession,
    #[error("Username {0} is already taken")]
    UsernameTaken(String),
}

/// Errors raised while building a [`crate::app_system::MarketConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid marketplace configuration: {reason}")]
    Invalid { reason: String },
    #[error("environment variable {var} has an invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Umbrella error returned by every marketplace operation and client call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl MarketError {
    /// Maps the failure onto the marketplace error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(AuthError::UsernameTaken(_)) => ErrorKind::ValidationFailure,
            Self::Auth(_) => ErrorKind::AuthenticationFailure,
            Self::Catalog(e) => catalog_kind(e),
            Self::Cart(e) => match e {
                CartError::InvalidQuantity(_) => ErrorKind::ValidationFailure,
                CartError::InsufficientStock { .. } | CartError::ProductUnavailable { .. } => {
                    ErrorKind::InsufficientStock
                }
                CartError::ItemNotFound(_) | CartError::ProductNotFound(_) => ErrorKind::NotFound,
            },
            Self::Checkout(e) => match e {
                CheckoutError::EmptyCart => ErrorKind::EmptyCart,
                CheckoutError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
                CheckoutError::Payment(p) => payment_kind(p),
                CheckoutError::Catalog(c) => catalog_kind(c),
            },
            Self::Payment(e) => payment_kind(e),
            Self::TransactionNotFound(_) => ErrorKind::NotFound,
            Self::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

fn catalog_kind(error: &CatalogError) -> ErrorKind {
    match error {
        CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_) => ErrorKind::NotFound,
        CatalogError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
        CatalogError::CategoryInactive(_)
        | CatalogError::CategoryInUse { .. }
        | CatalogError::Validation { .. } => ErrorKind::ValidationFailure,
    }
}

fn payment_kind(error: &PaymentError) -> ErrorKind {
    match error {
        PaymentError::InvalidPaymentMethod(_) => ErrorKind::InvalidPaymentMethod,
        PaymentError::InvalidAmount(_) => ErrorKind::InvalidAmount,
    }
}
