//! Application layer orchestrating a calculation.
//!
//! `PaymentCalculator` resolves the payment strategy, delegates the total to
//! the pricing service behind the `PricingService` port, and builds the
//! displayed `PaymentResult`.

pub mod calculator;
