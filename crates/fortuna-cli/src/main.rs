//! Fortuna operator CLI
//!
//! Talks to the same payment and metrics endpoints as the web app.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortuna_metrics::{EventMetadata, MetricEventType, MetricsClient};
use fortuna_payments::{
    HttpPaymentApi, LocalPaymentState, PaymentApi, PaymentConfig, PaymentFlow, PaymentIntentRequest,
};

#[derive(Parser, Debug)]
#[command(name = "fortuna", version, about = "Fortuna payment service tooling")]
struct Cli {
    /// Payment service base URL (overrides FORTUNA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a payment intent succeeded
    Verify {
        payment_intent_id: String,
    },

    /// Show the publishable key served to the browser
    Config,

    /// Create a payment intent
    CreateIntent {
        /// Amount in minor units (cents)
        #[arg(long)]
        amount: u64,

        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Record a button-click metric
    Track {
        #[arg(long)]
        trigger: String,

        #[arg(long, default_value = "/")]
        screen: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = PaymentConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = PaymentConfig {
            base_url: PaymentConfig::new(url)?.base_url,
            ..config
        };
    }
    tracing::debug!(api_url = %config.base_url, "Using payment service");

    match cli.command {
        Command::Verify { payment_intent_id } => {
            let flow = PaymentFlow::new(HttpPaymentApi::new(&config), LocalPaymentState::new(), &config);
            let success = flow
                .verify_payment(&payment_intent_id)
                .await
                .with_context(|| format!("verifying {payment_intent_id}"))?;
            println!("{payment_intent_id}: {}", if success { "succeeded" } else { "not succeeded" });
        }

        Command::Config => {
            let api = HttpPaymentApi::new(&config);
            match api.fetch_publishable_key().await? {
                Some(key) => println!("{key}"),
                None => {
                    tracing::warn!("Payment service returned no publishable key");
                    std::process::exit(2);
                }
            }
        }

        Command::CreateIntent { amount, currency, description } => {
            anyhow::ensure!(amount > 0, "amount must be positive");
            let api = HttpPaymentApi::new(&config);
            let currency = currency.unwrap_or_else(|| config.default_currency.clone());
            let request = PaymentIntentRequest::new(amount, currency)
                .with_description(description.unwrap_or_else(|| config.description.clone()));

            let intent = api.create_payment_intent(&request).await?;
            println!(
                "{} ({} {})",
                intent.payment_intent_id, intent.amount, intent.currency
            );
        }

        Command::Track { trigger, screen } => {
            let metrics = MetricsClient::new(config.base_url.as_str())?;
            metrics
                .save_metric_event(MetricEventType::ButtonClick, EventMetadata::new(trigger, screen))
                .await?;
            println!("recorded");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_intent() {
        let cli = Cli::parse_from(["fortuna", "create-intent", "--amount", "1000"]);
        assert!(matches!(
            cli.command,
            Command::CreateIntent { amount: 1000, currency: None, description: None }
        ));
    }

    #[test]
    fn test_parse_global_api_url() {
        let cli = Cli::parse_from(["fortuna", "verify", "pi_123", "--api-url", "http://127.0.0.1:9000"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(matches!(cli.command, Command::Verify { payment_intent_id } if payment_intent_id == "pi_123"));
    }
}
