use super::payment_type::PaymentType;
use super::processor::PaymentProcessor;
use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Outcome of a single calculation, kept only for display.
///
/// `tax` is derived from the other two figures, so `amount + tax == total`
/// holds for every result built through [`PaymentResult::from_total`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResult {
    pub amount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_type: PaymentType,
    /// Name reported by the processor that computed `tax`.
    pub method: &'static str,
}

impl PaymentResult {
    /// Fails with `InvalidAmount` when `total - amount` is outside the
    /// representable decimal range.
    pub fn from_total(
        payment_type: PaymentType,
        processor: &dyn PaymentProcessor,
        amount: Decimal,
        total: Decimal,
    ) -> Result<Self> {
        if total.checked_sub(amount).is_none() {
            return Err(PaymentError::InvalidAmount(format!(
                "tax overflows for amount {amount} and total {total}"
            )));
        }

        Ok(Self {
            amount,
            tax: processor.calculate_tax(amount, total),
            total,
            payment_type,
            method: processor.name(),
        })
    }

    /// Tax as a percentage of the original amount, e.g. `"10.00%"`.
    pub fn tax_percentage(&self) -> String {
        if self.amount <= Decimal::ZERO {
            return "0%".to_string();
        }

        match self
            .tax
            .checked_div(self.amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(percentage) => format!(
                "{:.2}%",
                percentage.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            None => "n/a".to_string(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.amount.checked_add(self.tax) == Some(self.total)
    }
}
