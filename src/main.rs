use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paycalc::application::calculator::PaymentCalculator;
use paycalc::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ServiceConfig};
use paycalc::domain::amount::parse_amount;
use paycalc::domain::ports::PricingServiceBox;
use paycalc::infrastructure::http::HttpPricingService;
use paycalc::interfaces::csv::request_reader::PaymentRequestReader;
use paycalc::interfaces::csv::result_writer::ResultWriter;
use paycalc::interfaces::receipt::receipt_writer::ReceiptWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the pricing service
    #[arg(long, global = true, env = "PAYMENT_SERVICE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "PAYMENT_SERVICE_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the payment types offered by the pricing service
    Types,
    /// Ask the pricing service for a total and print the receipt
    Pay {
        /// Payment type tag (CREDIT_CARD, DEBIT_CARD, PAYPAL)
        #[arg(long = "type")]
        payment_type: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Compute the tax for figures already known, without contacting the service
    Tax {
        #[arg(long = "type")]
        payment_type: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long, allow_hyphen_values = true)]
        total: String,
    },
    /// Run every `payment_type, amount` row of a CSV file and print results as CSV
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::new(cli.base_url, cli.timeout_secs);

    match cli.command {
        Command::Types => {
            let calculator = calculator(&config)?;
            let types = calculator.available_payment_types().await.into_diagnostic()?;
            ReceiptWriter::new(io::stdout().lock())
                .write_payment_types(&types)
                .into_diagnostic()?;
        }
        Command::Pay {
            payment_type,
            amount,
        } => {
            let calculator = calculator(&config)?;
            let result = calculator
                .calculate(&payment_type, &amount)
                .await
                .into_diagnostic()?;
            ReceiptWriter::new(io::stdout().lock())
                .write_receipt(&result)
                .into_diagnostic()?;
        }
        Command::Tax {
            payment_type,
            amount,
            total,
        } => {
            let amount = parse_amount(&amount).into_diagnostic()?;
            let total = parse_amount(&total).into_diagnostic()?;
            let result =
                PaymentCalculator::tax_only(&payment_type, amount, total).into_diagnostic()?;
            ReceiptWriter::new(io::stdout().lock())
                .write_receipt(&result)
                .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let calculator = calculator(&config)?;
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentRequestReader::new(file);

            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock());
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        match calculator
                            .calculate(&request.payment_type, &request.amount)
                            .await
                        {
                            Ok(result) => writer.write_result(&result).into_diagnostic()?,
                            Err(e) => tracing::error!(
                                payment_type = %request.payment_type,
                                amount = %request.amount,
                                "Error calculating payment: {e}"
                            ),
                        }
                    }
                    Err(e) => tracing::error!("Error reading request: {e}"),
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

fn calculator(config: &ServiceConfig) -> Result<PaymentCalculator> {
    let pricing: PricingServiceBox = Box::new(HttpPricingService::new(config).into_diagnostic()?);
    Ok(PaymentCalculator::new(pricing))
}
