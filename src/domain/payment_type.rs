use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A payment method tag as advertised by the pricing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    CreditCard,
    DebitCard,
    Paypal,
}

impl PaymentType {
    /// Every supported tag, in the order the service advertises them.
    pub const ALL: [PaymentType; 3] = [
        PaymentType::CreditCard,
        PaymentType::DebitCard,
        PaymentType::Paypal,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            PaymentType::CreditCard => "CREDIT_CARD",
            PaymentType::DebitCard => "DEBIT_CARD",
            PaymentType::Paypal => "PAYPAL",
        }
    }

    /// Localized display label for the method.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::CreditCard => "Tarjeta de Crédito",
            PaymentType::DebitCard => "Tarjeta de Débito",
            PaymentType::Paypal => "PayPal",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for PaymentType {
    type Err = PaymentError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        PaymentType::ALL
            .into_iter()
            .find(|payment_type| payment_type.as_tag() == tag)
            .ok_or_else(|| PaymentError::UnsupportedPaymentType(tag.to_string()))
    }
}
