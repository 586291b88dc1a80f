use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::PaymentError;

/// Identifier of a recorded payment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The fixed set of accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Upi,
    DebitCard,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Upi, Self::DebitCard, Self::NetBanking];

    pub fn code(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::DebitCard => "DEBIT_CARD",
            Self::NetBanking => "NET_BANKING",
        }
    }

    /// Message shown to the buyer once the payment has been authorized.
    pub fn redirect_message(self, amount: f64) -> String {
        let target = match self {
            Self::Upi => "UPI",
            Self::DebitCard => "your bank",
            Self::NetBanking => "Net Banking",
        };
        format!("You will be redirected to {target} to make a payment of Rs. {amount:.2}")
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.code() == s)
            .ok_or_else(|| PaymentError::InvalidPaymentMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
}

/// A completed payment. Immutable once recorded in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
}
