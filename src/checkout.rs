//! Converts a cart into a paid transaction and debits inventory.
//!
//! Steps, in order:
//! 1. refuse an absent or empty cart
//! 2. re-validate every line against current stock, mutating nothing
//! 3. compute the live total
//! 4. authorize the payment (records the transaction)
//! 5. debit stock for every line and clear the cart
//!
//! Stock and cart are only touched after payment succeeds. The caller holds
//! `&mut` over catalog, cart and ledger for the whole call, so nothing can
//! change stock between steps 2 and 5.

use tracing::{info, instrument, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::domain::TransactionId;
use crate::error::CheckoutError;
use crate::payment::Ledger;

/// Runs the checkout pipeline for `user_id`.
///
/// # Errors
/// - [`CheckoutError::EmptyCart`] when `cart` is `None` or has no lines
/// - [`CheckoutError::InsufficientStock`] naming the first line whose product
///   is inactive or short of stock
/// - [`CheckoutError::Payment`] when the payment method or amount is invalid
///
/// On any error cart, catalog and ledger are left exactly as they were.
#[instrument(skip(catalog, cart, ledger))]
pub fn checkout(
    catalog: &mut Catalog,
    ledger: &mut Ledger,
    cart: Option<&mut Cart>,
    user_id: &str,
    payment_method: &str,
) -> Result<TransactionId, CheckoutError> {
    // Step 1
    let cart = match cart {
        Some(cart) if !cart.is_empty() => cart,
        _ => {
            warn!("Checkout attempted with empty cart");
            return Err(CheckoutError::EmptyCart);
        }
    };

    // Step 2
    for item in cart.items() {
        let product = catalog.product(&item.product_id)?;
        if !product.is_available(u64::from(item.quantity)) {
            warn!(product_id = %product.id, requested = item.quantity, available = product.stock, "Stock re-validation failed");
            return Err(CheckoutError::InsufficientStock {
                product_id: product.id.clone(),
                name: product.name.clone(),
                requested: u64::from(item.quantity),
                available: if product.is_active() { product.stock } else { 0 },
            });
        }
    }

    // Step 3
    let total = cart.total_amount(catalog);

    // Step 4
    let transaction_id = ledger.authorize(total, payment_method, user_id)?;

    // Step 5
    for item in cart.items() {
        catalog.debit_stock(&item.product_id, item.quantity)?;
    }
    cart.clear();

    info!(transaction_id = %transaction_id, total, "Checkout completed");
    Ok(transaction_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryCreate, ProductCreate, ProductPatch};
    use crate::error::PaymentError;

    struct Fixture {
        catalog: Catalog,
        ledger: Ledger,
        cart: Cart,
    }

    impl Fixture {
        fn new() -> Self {
            let mut catalog = Catalog::new();
            let cat = catalog
                .add_category(CategoryCreate { name: "Books".into(), description: String::new() })
                .unwrap();
            for (name, price, stock) in [("Python Book", 800.0, 8), ("Rust Book", 1200.0, 2), ("Bookmark", 0.0, 50)] {
                catalog
                    .add_product(ProductCreate {
                        name: name.into(),
                        price,
                        category_id: cat.clone(),
                        description: String::new(),
                        stock,
                    })
                    .unwrap();
            }
            Self { catalog, ledger: Ledger::new(), cart: Cart::new("user1") }
        }

        fn add(&mut self, product_id: &str, quantity: i64) {
            let product = self.catalog.get_product(product_id).unwrap();
            self.cart.add_item(product, quantity).unwrap();
        }

        fn run(&mut self, method: &str) -> Result<TransactionId, CheckoutError> {
            checkout(&mut self.catalog, &mut self.ledger, Some(&mut self.cart), "user1", method)
        }

        fn stock(&self, product_id: &str) -> u32 {
            self.catalog.get_product(product_id).unwrap().stock
        }
    }

    #[test]
    fn test_empty_cart_is_refused() {
        let mut f = Fixture::new();

        assert_eq!(f.run("UPI"), Err(CheckoutError::EmptyCart));
        let no_cart = checkout(&mut f.catalog, &mut f.ledger, None, "user1", "UPI");
        assert_eq!(no_cart, Err(CheckoutError::EmptyCart));
        assert!(f.ledger.is_empty());
    }

    #[test]
    fn test_successful_checkout_debits_and_clears() {
        let mut f = Fixture::new();
        f.add("prod1", 3);
        f.add("prod2", 2);

        let id = f.run("NET_BANKING").unwrap();

        assert_eq!(f.stock("prod1"), 5);
        assert_eq!(f.stock("prod2"), 0);
        assert!(f.cart.is_empty());
        let tx = f.ledger.get_transaction(&id).unwrap();
        assert_eq!(tx.amount, 3.0 * 800.0 + 2.0 * 1200.0);
        assert_eq!(tx.user_id, "user1");
    }

    #[test]
    fn test_transaction_ids_are_unique() {
        let mut f = Fixture::new();
        f.add("prod1", 1);
        let first = f.run("UPI").unwrap();
        f.add("prod1", 1);
        let second = f.run("UPI").unwrap();

        assert_ne!(first, second);
        assert_eq!(f.ledger.len(), 2);
        assert_eq!(f.stock("prod1"), 6);
    }

    #[test]
    fn test_stock_drop_after_add_is_caught() {
        let mut f = Fixture::new();
        f.add("prod1", 2);
        f.add("prod2", 2);
        f.catalog
            .update_product("prod2", ProductPatch { stock: Some(1), ..Default::default() })
            .unwrap();

        let err = f.run("UPI").unwrap_err();

        assert_eq!(
            err,
            CheckoutError::InsufficientStock {
                product_id: "prod2".into(),
                name: "Rust Book".into(),
                requested: 2,
                available: 1,
            }
        );
        assert_eq!(f.stock("prod1"), 8);
        assert_eq!(f.stock("prod2"), 1);
        assert_eq!(f.cart.items().len(), 2);
        assert!(f.ledger.is_empty());
    }

    #[test]
    fn test_deactivated_product_blocks_checkout() {
        let mut f = Fixture::new();
        f.add("prod1", 1);
        f.catalog.deactivate_product("prod1").unwrap();

        let err = f.run("UPI").unwrap_err();

        assert!(matches!(err, CheckoutError::InsufficientStock { available: 0, .. }));
        assert_eq!(f.stock("prod1"), 8);
        assert!(!f.cart.is_empty());
    }

    #[test]
    fn test_payment_failure_leaves_state_untouched() {
        let mut f = Fixture::new();
        f.add("prod1", 2);

        let err = f.run("CASH_ON_DELIVERY").unwrap_err();

        assert_eq!(
            err,
            CheckoutError::Payment(PaymentError::InvalidPaymentMethod("CASH_ON_DELIVERY".into()))
        );
        assert_eq!(f.stock("prod1"), 8);
        assert_eq!(f.cart.item("prod1").unwrap().quantity, 2);
        assert!(f.ledger.is_empty());
    }

    #[test]
    fn test_payment_method_outside_the_set_is_refused() {
        let mut f = Fixture::new();
        f.add("prod1", 2);

        let err = f.run(" upi ").unwrap_err();

        assert_eq!(err, CheckoutError::Payment(PaymentError::InvalidPaymentMethod(" upi ".into())));
        assert_eq!(f.stock("prod1"), 8);
        assert_eq!(f.cart.item("prod1").unwrap().quantity, 2);
        assert!(f.ledger.is_empty());
    }

    #[test]
    fn test_zero_total_is_an_invalid_amount() {
        let mut f = Fixture::new();
        f.add("prod3", 4);

        let err = f.run("UPI").unwrap_err();

        assert_eq!(err, CheckoutError::Payment(PaymentError::InvalidAmount(0.0)));
        assert_eq!(f.stock("prod3"), 50);
        assert!(!f.cart.is_empty());
    }

    #[test]
    fn test_total_uses_price_at_checkout_time() {
        let mut f = Fixture::new();
        f.add("prod1", 1);
        f.catalog
            .update_product("prod1", ProductPatch { price: Some(999.0), ..Default::default() })
            .unwrap();

        let id = f.run("DEBIT_CARD").unwrap();

        assert_eq!(f.ledger.get_transaction(&id).unwrap().amount, 999.0);
    }
}
