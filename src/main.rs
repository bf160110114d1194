use clap::Parser;
use miette::{IntoDiagnostic, Result};
use neobank::application::engine::PaymentEngine;
use neobank::domain::account::{Account, Balance};
use neobank::domain::payment::PaymentMethod;
use neobank::domain::ports::{LedgerStoreBox, SessionStoreBox};
use neobank::infrastructure::in_memory::{InMemoryLedger, InMemorySessionStore};
use neobank::interfaces::csv::request_reader::RequestReader;
use neobank::interfaces::csv::statement_writer::StatementWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Opening balance for the session account
    #[arg(long, default_value = "12345.67")]
    balance: Decimal,

    /// Start the session in offline mode (only NFC payments allowed)
    #[arg(long)]
    offline: bool,

    /// Simulated contactless listening dwell before an NFC request is submitted
    #[arg(long, default_value_t = 0)]
    nfc_dwell_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let session: SessionStoreBox = Box::new(InMemorySessionStore::new(Account::new(
        Balance::new(cli.balance),
        cli.offline,
    )));
    let ledger: LedgerStoreBox = Box::new(InMemoryLedger::new());
    let engine = PaymentEngine::new(session, ledger);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => {
                // The tap dwell is presentation timing only; the authorization
                // itself is identical to the other methods.
                if request.method == PaymentMethod::Nfc && cli.nfc_dwell_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(cli.nfc_dwell_ms)).await;
                }
                if let Err(e) = engine.submit(request).await {
                    eprintln!("Error processing request: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    let statement = engine.into_statement().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = StatementWriter::new(stdout.lock());
    writer.write_statement(statement).into_diagnostic()?;

    Ok(())
}
