use crate::account::{Account, AccountBuilder};
use crate::accounts::{change_transaction_limit, limited_withdrawal};
use crate::config::BankConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::events::Event;
use crate::ledger::Ledger;
use crate::limits::TransactionLimit;
use crate::time::SharedTime;
use crate::types::{AccountKind, LimitChange};

/// chequing account: an account with a transaction limit
#[derive(Debug)]
pub struct ChequingAccount {
    account: Account,
    limit: TransactionLimit,
}

impl ChequingAccount {
    pub fn builder() -> ChequingBuilder {
        ChequingBuilder::new()
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Money> {
        limited_withdrawal(&mut self.account, &self.limit, amount)
    }

    pub fn change_limit(&mut self, new_limit: Money) -> Result<LimitChange> {
        change_transaction_limit(&mut self.account, &mut self.limit, new_limit)
    }

    pub fn transaction_limit(&self) -> Money {
        self.limit.amount()
    }

    pub fn balance(&self) -> Money {
        self.account.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        self.account.ledger()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn events(&self) -> &[Event] {
        self.account.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.account.take_events()
    }

    pub fn json(&self) -> String {
        crate::views::ChequingView::from_chequing(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

#[derive(Default)]
pub struct ChequingBuilder {
    inner: AccountBuilder,
    transaction_limit: Option<Money>,
}

impl ChequingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(mut self, time: &SharedTime) -> Self {
        self.inner = self.inner.set_time(time);
        self
    }

    pub fn holder(mut self, name: impl Into<String>) -> Self {
        self.inner = self.inner.holder(name);
        self
    }

    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.inner = self.inner.account_number(number);
        self
    }

    pub fn initial_balance(mut self, amount: Money) -> Self {
        self.inner = self.inner.initial_balance(amount);
        self
    }

    pub fn config(mut self, config: BankConfig) -> Self {
        self.inner = self.inner.config(config);
        self
    }

    pub fn transaction_limit(mut self, limit: Money) -> Self {
        self.transaction_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<ChequingAccount> {
        let config = self.inner.resolved_config()?;
        let limit = TransactionLimit::new(
            self.transaction_limit
                .unwrap_or(config.default_transaction_limit),
        )?;
        let account = self.inner.build_as(AccountKind::Chequing)?;

        Ok(ChequingAccount { account, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BankError;
    use crate::time::test_time;
    use chrono::{TimeZone, Utc};

    fn chequing(balance: i64, limit: i64) -> ChequingAccount {
        let time = test_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        ChequingAccount::builder()
            .holder("Alan Turing")
            .account_number("CHQ-001")
            .initial_balance(Money::from_major(balance))
            .transaction_limit(Money::from_major(limit))
            .set_time(&time)
            .build()
            .unwrap()
    }

    #[test]
    fn test_withdraw_order() {
        let mut account = chequing(1000, 100);

        assert!(matches!(
            account.withdraw(Money::ZERO),
            Err(BankError::InvalidAmount { .. })
        ));
        assert!(matches!(
            account.withdraw(Money::from_major(150)),
            Err(BankError::TransactionLimitExceeded { .. })
        ));
        assert_eq!(account.withdraw(Money::from_major(100)).unwrap(), Money::from_major(900));
        assert_eq!(account.ledger().transaction_len(), 2);
    }

    #[test]
    fn test_balance_checked_after_limit() {
        let mut account = chequing(40, 100);
        assert_eq!(
            account.withdraw(Money::from_major(60)),
            Err(BankError::InsufficientFunds {
                available: Money::from_major(40),
                requested: Money::from_major(60),
            })
        );
        assert_eq!(account.balance(), Money::from_major(40));
    }

    #[test]
    fn test_change_limit_unchanged() {
        let mut account = chequing(100, 100);
        assert_eq!(
            account.change_limit(Money::from_major(100)).unwrap(),
            LimitChange::Unchanged { limit: Money::from_major(100) }
        );
        assert_eq!(account.change_limit(Money::ZERO).unwrap().current(), Money::ZERO);
        assert!(account.withdraw(Money::from_major(1)).is_err());
    }

    #[test]
    fn test_default_limit_from_config() {
        let account = ChequingAccount::builder()
            .holder("Alan Turing")
            .account_number("CHQ-002")
            .config(BankConfig {
                default_transaction_limit: Money::from_major(250),
                ..BankConfig::default()
            })
            .build()
            .unwrap();
        assert_eq!(account.transaction_limit(), Money::from_major(250));
        assert_eq!(account.account().kind(), AccountKind::Chequing);
    }
}
