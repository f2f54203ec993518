use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unsupported payment type: {0}")]
    UnsupportedPaymentType(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Pricing service error: {0}")]
    PricingService(String),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
