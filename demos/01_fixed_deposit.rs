/// fixed deposit - lock a deposit and release it a year later with controlled time
use bank_accounts_rs::{test_time, FixedDepositOutcome, Money, Rate, SavingsAccount};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("=== fixed deposit example ===\n");

    let time = test_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let controller = time.test_control().unwrap();

    let mut savings = SavingsAccount::builder()
        .holder("Grace Hopper")
        .account_number("SAV-001")
        .initial_balance(Money::from_major(1_000))
        .transaction_limit(Money::from_major(100))
        .set_time(&time)
        .build()?;

    // limit applies before the balance check
    if let Err(e) = savings.withdraw(Money::from_major(150)) {
        println!("withdrawal refused: {}", e);
    }

    if let FixedDepositOutcome::Opened { release_date, payout, .. } =
        savings.set_fixed_deposit(Money::from_major(500), Some(Rate::from_decimal(dec!(0.02))))?
    {
        println!("fixed deposit locked until {}, pays {}", release_date, payout.to_display());
    }

    // a second deposit while the first is locked
    controller.advance(chrono::Duration::days(90));
    if let Err(e) = savings.set_fixed_deposit(Money::from_major(100), None) {
        println!("on {}: {}", time.now().format("%Y-%m-%d"), e);
    }

    // move to the release date
    if let Some(deposit) = savings.fixed_deposit() {
        controller.advance(deposit.release_date() - time.now());
    }
    if let FixedDepositOutcome::Matured { payout, .. } = savings.set_fixed_deposit(Money::ZERO, None)? {
        println!("on {}: released {}", time.now().format("%Y-%m-%d"), payout.to_display());
    }

    println!("\nbalance: {}", savings.balance().to_display());
    println!("{}", savings.json());

    Ok(())
}
