use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch file: a raw tag and a raw amount.
///
/// Both fields are kept as text so that validation happens in the
/// calculator and each bad row fails on its own.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub payment_type: String,
    pub amount: String,
}

/// Reads payment requests from a CSV source with a
/// `payment_type, amount` header.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes requests, one `Result` per row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
