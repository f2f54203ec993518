//! Input and output formats: CSV batches and printed receipts.

pub mod csv;
pub mod receipt;
