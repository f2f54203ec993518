use crate::domain::amount::parse_amount;
use crate::domain::factory::{ProcessorFactory, processor_for};
use crate::domain::payment_result::PaymentResult;
use crate::domain::payment_type::PaymentType;
use crate::domain::ports::PricingServiceBox;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Entry point for payment calculations.
///
/// Resolves the payment strategy locally, asks the pricing service for the
/// total, and derives the tax from the two figures.
pub struct PaymentCalculator {
    pricing: PricingServiceBox,
    factory: ProcessorFactory,
}

impl PaymentCalculator {
    pub fn new(pricing: PricingServiceBox) -> Self {
        Self::with_factory(pricing, Box::new(processor_for))
    }

    /// Uses `factory` instead of the built-in processor mapping.
    pub fn with_factory(pricing: PricingServiceBox, factory: ProcessorFactory) -> Self {
        Self { pricing, factory }
    }

    /// Supported payment types advertised by the service, in advertised order.
    ///
    /// Unknown tags are logged and skipped; duplicates are collapsed.
    pub async fn available_payment_types(&self) -> Result<Vec<PaymentType>> {
        let advertised = self.pricing.payment_types().await?;

        let mut types = Vec::with_capacity(advertised.len());
        for tag in advertised {
            match tag.parse::<PaymentType>() {
                Ok(payment_type) if !types.contains(&payment_type) => types.push(payment_type),
                Ok(_) => {}
                Err(e) => tracing::warn!(%tag, error = %e, "skipping advertised payment type"),
            }
        }
        Ok(types)
    }

    /// Runs one calculation for a raw tag and a raw amount.
    ///
    /// The tag is resolved before anything else, so an unsupported tag never
    /// reaches the pricing service.
    pub async fn calculate(&self, tag: &str, amount: &str) -> Result<PaymentResult> {
        let payment_type: PaymentType = tag.parse()?;
        let processor = (self.factory)(payment_type);
        let amount = parse_amount(amount)?;

        let total = self.pricing.pay(payment_type, amount).await?;
        let result = PaymentResult::from_total(payment_type, processor.as_ref(), amount, total)
            .map_err(|_| {
                PaymentError::PricingService(format!(
                    "quoted total {total} cannot be reconciled with amount {amount}"
                ))
            })?;

        if result.tax < Decimal::ZERO {
            tracing::warn!(
                %payment_type,
                amount = %result.amount,
                total = %result.total,
                "pricing service quoted a total below the amount"
            );
        }
        tracing::info!(%payment_type, amount = %result.amount, tax = %result.tax, "payment calculated");

        Ok(result)
    }

    /// Applies the strategy to figures already in hand, without the service.
    pub fn tax_only(tag: &str, amount: Decimal, total: Decimal) -> Result<PaymentResult> {
        let payment_type: PaymentType = tag.parse()?;
        let processor = processor_for(payment_type);
        PaymentResult::from_total(payment_type, processor.as_ref(), amount, total)
    }
}
