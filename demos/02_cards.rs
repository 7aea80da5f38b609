/// cards - debit and credit payments, pin changes and manager-approved limits
use bank_accounts_rs::{BranchAuthority, Card, CreditCard, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("=== cards example ===\n");

    let mut debit = Card::builder()
        .account_title("Ada Lovelace")
        .account_number("ACC-001")
        .card_number("4000-0000-0000-0001")
        .pin("1234")
        .initial_balance(Money::from_major(300))
        .build()?;

    debit.make_payment("1234", Money::from_major(45), "Bookshop")?;
    debit.make_payment("1234", Money::from_major(12), "")?;
    debit.change_pin("1234", "4321")?;

    let statement = debit.check_transactions("4321")?;
    println!("{}", statement.to_json_pretty()?);

    // one authority per branch, shared by every credit card it issues
    let branch = BranchAuthority::shared("branch-0042")?;

    let mut credit = CreditCard::builder()
        .account_title("Ada Lovelace")
        .account_number("ACC-001")
        .card_number("5500-0000-0000-0004")
        .pin("1234")
        .credit_limit(Money::from_major(200))
        .interest_rate(Rate::from_percentage(19))
        .authority(&branch)
        .build()?;

    credit.make_payment("1234", Money::from_major(150), "Airline")?;
    if let Err(e) = credit.make_payment("1234", Money::from_major(100), "Hotel") {
        println!("payment refused: {}", e);
    }

    if let Err(e) = credit.set_credit_limit("1234", None, Money::from_major(500)) {
        println!("limit change refused: {}", e);
    }
    let change = credit.set_credit_limit("1234", Some("branch-0042"), Money::from_major(500))?;
    println!("credit limit change: {:?}", change);

    credit.make_payment("1234", Money::from_major(100), "Hotel")?;
    println!("\n{}", credit.json());

    Ok(())
}
