use rust_decimal::Decimal;

/// Capability set shared by every payment method.
///
/// Implementations are stateless; `calculate_tax` is a pure function of its
/// inputs and performs no I/O. It must not panic: the built-in variants
/// saturate at the decimal bounds, and callers that need an exact figure
/// check the range first (see `PaymentResult::from_total`).
pub trait PaymentProcessor: Send + Sync {
    /// Human-readable, localized name of the method.
    fn name(&self) -> &'static str;

    /// Tax charged on `amount` given the `total` quoted by the pricing service.
    fn calculate_tax(&self, amount: Decimal, total: Decimal) -> Decimal;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn name(&self) -> &'static str {
        "Tarjeta de Crédito"
    }

    fn calculate_tax(&self, amount: Decimal, total: Decimal) -> Decimal {
        total.saturating_sub(amount)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DebitCardProcessor;

impl PaymentProcessor for DebitCardProcessor {
    fn name(&self) -> &'static str {
        "Tarjeta de Débito"
    }

    fn calculate_tax(&self, amount: Decimal, total: Decimal) -> Decimal {
        total.saturating_sub(amount)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PaypalProcessor;

impl PaymentProcessor for PaypalProcessor {
    fn name(&self) -> &'static str {
        "PayPal"
    }

    fn calculate_tax(&self, amount: Decimal, total: Decimal) -> Decimal {
        total.saturating_sub(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_card_tax() {
        let processor = CreditCardProcessor;
        assert_eq!(processor.calculate_tax(dec!(100), dec!(110)), dec!(10));
        assert_eq!(processor.name(), "Tarjeta de Crédito");
    }

    #[test]
    fn test_debit_card_tax_keeps_precision() {
        let processor = DebitCardProcessor;
        assert_eq!(
            processor.calculate_tax(dec!(0.1), dec!(0.3)),
            dec!(0.2),
            "decimal subtraction must be exact"
        );
    }

    #[test]
    fn test_paypal_zero_tax() {
        let processor = PaypalProcessor;
        assert_eq!(processor.calculate_tax(dec!(50), dec!(50)), Decimal::ZERO);
    }

    #[test]
    fn test_negative_tax_is_not_rejected() {
        // A total below the amount yields a negative figure; no policy is applied here.
        let processor = PaypalProcessor;
        assert_eq!(processor.calculate_tax(dec!(50), dec!(40)), dec!(-10));
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let processor = CreditCardProcessor;
        assert_eq!(processor.calculate_tax(Decimal::MIN, Decimal::MAX), Decimal::MAX);
        assert_eq!(processor.calculate_tax(Decimal::MAX, Decimal::MIN), Decimal::MIN);
    }

    #[test]
    fn test_processors_as_trait_objects() {
        let processors: Vec<PaymentProcessorBox> = vec![
            Box::new(CreditCardProcessor),
            Box::new(DebitCardProcessor),
            Box::new(PaypalProcessor),
        ];

        for processor in &processors {
            assert!(!processor.name().is_empty());
            assert_eq!(processor.calculate_tax(dec!(20.25), dec!(24.50)), dec!(4.25));
        }
    }
}
