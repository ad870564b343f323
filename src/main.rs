use unicex::core::config::ExchangeConfig;
use unicex::utils::exchange_factory::{ExchangeFactory, ExchangeType};

/// Minimal CLI: `unicex <exchange>` prints the non-zero balances of the
/// account configured through `{EXCHANGE}_ACCESS_KEY` / `{EXCHANGE}_SECRET_KEY`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let exchange: ExchangeType = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "okex".to_string())
        .parse()?;

    #[cfg(feature = "env-file")]
    let config = ExchangeConfig::from_env_file(&exchange.to_string())?;
    #[cfg(not(feature = "env-file"))]
    let config = ExchangeConfig::from_env(&exchange.to_string())?;
    let connector = ExchangeFactory::create_connector(exchange, config).await?;

    println!("connected to {}", connector.exchange_name());
    for balance in connector.get_account_balance().await? {
        println!(
            "{:<8} {:>24} {:?}",
            balance.currency, balance.balance, balance.kind
        );
    }

    Ok(())
}
