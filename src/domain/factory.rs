use super::payment_type::PaymentType;
use super::processor::{
    CreditCardProcessor, DebitCardProcessor, PaymentProcessorBox, PaypalProcessor,
};
use crate::error::Result;

/// Injectable constructor mapping a payment type to its processor.
pub type ProcessorFactory = Box<dyn Fn(PaymentType) -> PaymentProcessorBox + Send + Sync>;

/// Builds a fresh processor for an already-validated payment type.
pub fn processor_for(payment_type: PaymentType) -> PaymentProcessorBox {
    match payment_type {
        PaymentType::CreditCard => Box::new(CreditCardProcessor),
        PaymentType::DebitCard => Box::new(DebitCardProcessor),
        PaymentType::Paypal => Box::new(PaypalProcessor),
    }
}

/// Resolves a raw payment-type tag into a processor.
///
/// The tag must match one of the known values exactly. Any other tag fails
/// with [`PaymentError::UnsupportedPaymentType`](crate::error::PaymentError)
/// before anything is constructed.
pub fn create_processor(tag: &str) -> Result<PaymentProcessorBox> {
    let payment_type: PaymentType = tag.parse()?;
    Ok(processor_for(payment_type))
}
