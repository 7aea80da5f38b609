/// quick start - open an account, move some money, print its state
use bank_accounts_rs::{Account, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // open a basic account with $250
    let mut account = Account::builder()
        .holder("Ada Lovelace")
        .account_number("ACC-001")
        .initial_balance(Money::from_major(250))
        .build()?;

    account.deposit(Money::from_major(100))?;
    // $75.50 given in cents
    account.withdraw(Money::from_minor(7_550, 2)?)?;

    // overdrafts are refused and leave the balance alone
    if let Err(e) = account.withdraw(Money::from_major(1_000)) {
        println!("withdrawal refused: {}", e);
    }

    println!("{}", account.json());

    Ok(())
}
