use crate::domain::payment_result::PaymentResult;
use crate::domain::payment_type::PaymentType;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ResultRow {
    payment_type: PaymentType,
    amount: Decimal,
    tax: Decimal,
    total: Decimal,
}

impl From<&PaymentResult> for ResultRow {
    fn from(result: &PaymentResult) -> Self {
        Self {
            payment_type: result.payment_type,
            amount: result.amount,
            tax: result.tax,
            total: result.total,
        }
    }
}

/// Writes calculation results as CSV: `payment_type,amount,tax,total`.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, result: &PaymentResult) -> Result<()> {
        self.writer.serialize(ResultRow::from(result))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
