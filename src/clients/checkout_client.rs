use crate::domain::{Transaction, TransactionId};
use crate::marketplace::Receipt;
use crate::session::SessionToken;

market_client!(
    /// Checkout and the caller's own payment history.
    CheckoutClient
);

client_method!(CheckoutClient => fn checkout(token: SessionToken, payment_method: String) -> Receipt as Checkout);
client_method!(CheckoutClient => fn get_transaction(token: SessionToken, transaction_id: TransactionId) -> Transaction as GetTransaction);
client_method!(CheckoutClient => fn order_history(token: SessionToken) -> Vec<Transaction> as OrderHistory);
