//! Payment authorization and the append-only transaction ledger.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{PaymentMethod, Transaction, TransactionId, TransactionStatus};
use crate::error::PaymentError;

/// Records every successful payment. Entries are never modified or removed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: HashMap<TransactionId, Transaction>,
    order: Vec<TransactionId>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the payment request and records a successful transaction.
    ///
    /// The method is checked before the amount.
    ///
    /// # Errors
    /// - [`PaymentError::InvalidPaymentMethod`] if `payment_method` is not
    ///   one of `UPI`, `DEBIT_CARD`, `NET_BANKING`
    /// - [`PaymentError::InvalidAmount`] if `amount` is not strictly positive
    pub fn authorize(
        &mut self,
        amount: f64,
        payment_method: &str,
        user_id: &str,
    ) -> Result<TransactionId, PaymentError> {
        let method: PaymentMethod = payment_method.parse().inspect_err(|_| {
            warn!(payment_method, "Rejected unknown payment method");
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            warn!(amount, "Rejected non-positive payment amount");
            return Err(PaymentError::InvalidAmount(amount));
        }

        let id = TransactionId::new();
        let transaction = Transaction {
            id,
            amount,
            payment_method: method,
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            status: TransactionStatus::Success,
        };
        self.transactions.insert(id, transaction);
        self.order.push(id);
        info!(transaction_id = %id, amount, payment_method = %method, user_id, "Payment recorded");
        Ok(id)
    }

    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    /// Transactions owned by `user_id`, oldest first.
    pub fn transactions_for(&self, user_id: &str) -> Vec<&Transaction> {
        self.order
            .iter()
            .filter_map(|id| self.transactions.get(id))
            .filter(|t| t.user_id == user_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
