use super::payment_type::PaymentType;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Remote service that advertises payment methods and quotes totals.
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Raw tags as advertised; may include values this crate does not know.
    async fn payment_types(&self) -> Result<Vec<String>>;
    /// Total (amount plus tax) charged for `amount` with the given method.
    async fn pay(&self, payment_type: PaymentType, amount: Decimal) -> Result<Decimal>;
}

pub type PricingServiceBox = Box<dyn PricingService>;
