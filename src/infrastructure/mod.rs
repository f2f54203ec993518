//! Adapters implementing [`PricingService`](crate::domain::ports::PricingService).

pub mod http;
pub mod in_memory;
