use anyhow::{Context, Result};
use tracing::info;

use account_registry::{init_logger, Bank, DemoConfig};

fn main() -> Result<()> {
    init_logger();

    let config = DemoConfig::default();
    info!(version = account_registry::VERSION, "running demo scenario");

    let mut bank = Bank::new();
    bank.create_account(config.identifier.as_str())
        .context("creating demo account")?;

    let account = bank
        .get_account_mut(&config.identifier)
        .context("looking up demo account")?;
    account
        .deposit(config.deposit)
        .context("depositing into demo account")?;
    account
        .withdraw(config.withdraw)
        .context("withdrawing from demo account")?;

    println!("Balance: {:.1}", account.balance());

    Ok(())
}
