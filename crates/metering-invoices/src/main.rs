//! Metering Invoices - command-line access to the invoice API
//!
//! ```text
//! metering-invoices latest <customer-id>
//! metering-invoices all <customer-id>
//! ```
//!
//! Reads `METERING_API_KEY` (required), `METERING_ENDPOINT` and
//! `METERING_TIMEOUT_SECONDS` from the environment and prints the result
//! as JSON.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metering_client::{ClientOptions, InvoiceClient};

const USAGE: &str = "usage: METERING_API_KEY=<key> metering-invoices <latest|all> <customer-id>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Latest(String),
    All(String),
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let (Some(command), Some(customer_id), None) = (args.next(), args.next(), args.next()) else {
        return Err(USAGE.to_string());
    };

    match command.as_str() {
        "latest" => Ok(Command::Latest(customer_id)),
        "all" => Ok(Command::All(customer_id)),
        other => Err(format!("unknown command {other:?}\n{USAGE}")),
    }
}

fn api_key(lookup: impl Fn(&str) -> Option<String>) -> Result<String, String> {
    lookup("METERING_API_KEY")
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| format!("METERING_API_KEY must be set\n{USAGE}"))
}

async fn run(command: Command, api_key: String) -> Result<(), Box<dyn std::error::Error>> {
    let options = ClientOptions::from_env();

    tracing::info!(
        endpoint = %options.endpoint,
        timeout_seconds = options.timeout_seconds,
        "Client configuration loaded"
    );

    let client = InvoiceClient::with_options(api_key, options)?;

    let output = match command {
        Command::Latest(customer_id) => {
            serde_json::to_string_pretty(&client.get_latest_invoice(&customer_id).await?)?
        }
        Command::All(customer_id) => {
            let invoices = client.list_all_invoices(&customer_id).await?;
            tracing::info!(count = invoices.len(), "Invoices retrieved");
            serde_json::to_string_pretty(&invoices)?
        }
    };

    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let setup = parse_args(std::env::args().skip(1))
        .and_then(|command| Ok((command, api_key(|key| std::env::var(key).ok())?)));
    let (command, api_key) = match setup {
        Ok(setup) => setup,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(command, api_key).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}
