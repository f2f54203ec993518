use crate::domain::payment_type::PaymentType;
use crate::domain::ports::PricingService;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A recorded call to [`PricingService::pay`].
#[derive(Debug, Clone, PartialEq)]
pub struct PayRequest {
    pub payment_type: PaymentType,
    pub amount: Decimal,
}

#[derive(Default)]
struct State {
    advertised: Vec<String>,
    rates: HashMap<PaymentType, Decimal>,
    requests: Vec<PayRequest>,
}

/// A thread-safe in-memory pricing service.
///
/// Quotes `total = amount * (1 + rate)` from a per-method rate table and
/// records every request. Stands in for the remote backend in tests and
/// offline runs. `Clone` shares the same state.
#[derive(Default, Clone)]
pub struct InMemoryPricingService {
    state: Arc<RwLock<State>>,
}

impl InMemoryPricingService {
    /// Creates a service advertising nothing and quoting no methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service advertising the three known methods at a flat rate.
    pub fn with_flat_rate(rate: Decimal) -> Self {
        let state = State {
            advertised: PaymentType::ALL.iter().map(|t| t.as_tag().to_string()).collect(),
            rates: PaymentType::ALL.into_iter().map(|t| (t, rate)).collect(),
            requests: Vec::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Replaces the advertised tag list; unknown tags are allowed.
    pub async fn advertise<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.write().await;
        state.advertised = tags.into_iter().map(Into::into).collect();
    }

    pub async fn set_rate(&self, payment_type: PaymentType, rate: Decimal) {
        let mut state = self.state.write().await;
        state.rates.insert(payment_type, rate);
    }

    pub async fn requests(&self) -> Vec<PayRequest> {
        self.state.read().await.requests.clone()
    }
}

#[async_trait]
impl PricingService for InMemoryPricingService {
    async fn payment_types(&self) -> Result<Vec<String>> {
        Ok(self.state.read().await.advertised.clone())
    }

    async fn pay(&self, payment_type: PaymentType, amount: Decimal) -> Result<Decimal> {
        let mut state = self.state.write().await;
        state.requests.push(PayRequest {
            payment_type,
            amount,
        });

        let rate = state.rates.get(&payment_type).copied().ok_or_else(|| {
            PaymentError::PricingService(format!("no rate configured for {payment_type}"))
        })?;

        amount
            .checked_mul(Decimal::ONE + rate)
            .ok_or_else(|| PaymentError::PricingService("total overflows".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_flat_rate_quotes() {
        let service = InMemoryPricingService::with_flat_rate(dec!(0.10));

        let total = service.pay(PaymentType::CreditCard, dec!(100)).await.unwrap();
        assert_eq!(total, dec!(110));

        let types = service.payment_types().await.unwrap();
        assert_eq!(types, vec!["CREDIT_CARD", "DEBIT_CARD", "PAYPAL"]);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let service = InMemoryPricingService::with_flat_rate(dec!(0));
        service.pay(PaymentType::Paypal, dec!(50)).await.unwrap();

        let requests = service.requests().await;
        assert_eq!(
            requests,
            vec![PayRequest {
                payment_type: PaymentType::Paypal,
                amount: dec!(50),
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_rate_fails() {
        let service = InMemoryPricingService::new();
        let result = service.pay(PaymentType::DebitCard, dec!(10)).await;
        assert!(matches!(result, Err(PaymentError::PricingService(_))));
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let service = InMemoryPricingService::new();
        let handle = service.clone();
        handle.set_rate(PaymentType::DebitCard, dec!(0.05)).await;
        handle.advertise(["DEBIT_CARD", "BITCOIN"]).await;

        assert_eq!(service.pay(PaymentType::DebitCard, dec!(20)).await.unwrap(), dec!(21));
        assert_eq!(service.payment_types().await.unwrap(), vec!["DEBIT_CARD", "BITCOIN"]);
    }
}
