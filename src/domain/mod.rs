//! Payment strategy resolution: the tag enumeration, the processor
//! capability and its variants, the factory, and the result record.

pub mod amount;
pub mod factory;
pub mod payment_result;
pub mod payment_type;
pub mod ports;
pub mod processor;
