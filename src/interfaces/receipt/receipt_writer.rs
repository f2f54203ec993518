use crate::domain::payment_result::PaymentResult;
use crate::domain::payment_type::PaymentType;
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Formats a figure as `$12.34 USD`.
pub fn format_usd(value: Decimal) -> String {
    format!(
        "${:.2} USD",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Writes human-readable receipts and payment-type listings.
pub struct ReceiptWriter<W: Write> {
    sink: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_receipt(&mut self, result: &PaymentResult) -> Result<()> {
        writeln!(self.sink, "Método de Pago: {}", result.method)?;
        writeln!(self.sink, "Monto Original: {}", format_usd(result.amount))?;
        writeln!(
            self.sink,
            "Impuesto ({}): {}",
            result.tax_percentage(),
            format_usd(result.tax)
        )?;
        writeln!(self.sink, "Total a Pagar: {}", format_usd(result.total))?;
        Ok(())
    }

    pub fn write_payment_types(&mut self, types: &[PaymentType]) -> Result<()> {
        for payment_type in types {
            writeln!(self.sink, "{}\t{}", payment_type.as_tag(), payment_type.label())?;
        }
        Ok(())
    }
}
