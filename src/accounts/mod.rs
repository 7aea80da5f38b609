pub mod chequing;
pub mod fixed_deposit;
pub mod savings;

pub use chequing::{ChequingAccount, ChequingBuilder};
pub use fixed_deposit::{FixedDeposit, FixedDepositOutcome};
pub use savings::{SavingsAccount, SavingsBuilder};

use log::info;

use crate::account::Account;
use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::events::Event;
use crate::limits::TransactionLimit;
use crate::types::LimitChange;

/// withdrawal guarded by a transaction limit
///
/// Checks run in a fixed order: amount, then limit, then funds. Nothing is
/// mutated unless all three pass.
pub(crate) fn limited_withdrawal(
    account: &mut Account,
    limit: &TransactionLimit,
    amount: Money,
) -> Result<Money> {
    if !amount.is_positive() {
        return Err(BankError::InvalidAmount { amount });
    }
    limit.check(amount)?;
    account.check_funds(amount)?;
    account.apply_withdrawal(amount, "withdrawal")
}

pub(crate) fn change_transaction_limit(
    account: &mut Account,
    limit: &mut TransactionLimit,
    new_limit: Money,
) -> Result<LimitChange> {
    let change = limit.change(new_limit)?;

    let timestamp = account.now();
    let account_id = account.id();
    account.events_mut().emit(Event::TransactionLimitChanged {
        account_id,
        change,
        timestamp,
    });
    info!(
        "account {}: transaction limit now {}",
        account.account_number(),
        change.current().to_display()
    );

    Ok(change)
}
