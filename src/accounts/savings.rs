use log::info;

use crate::account::{Account, AccountBuilder};
use crate::accounts::fixed_deposit::{FixedDeposit, FixedDepositOutcome};
use crate::accounts::{change_transaction_limit, limited_withdrawal};
use crate::config::BankConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{BankError, Result};
use crate::events::Event;
use crate::ledger::Ledger;
use crate::limits::TransactionLimit;
use crate::time::SharedTime;
use crate::types::{AccountKind, LimitChange};

/// savings account with a transaction limit and one fixed deposit slot
#[derive(Debug)]
pub struct SavingsAccount {
    account: Account,
    limit: TransactionLimit,
    interest_rate: Rate,
    fixed_deposit: Option<FixedDeposit>,
    config: BankConfig,
}

impl SavingsAccount {
    pub fn builder() -> SavingsBuilder {
        SavingsBuilder::new()
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

    /// lock a fixed deposit, or release the one already locked
    ///
    /// With an empty slot this opens a deposit of `amount` at `rate` (the
    /// account's current rate when `None`) and makes that the account's
    /// rate. The amount stays in the balance while locked.
    ///
    /// With a locked slot `amount` and `rate` are ignored. On the release
    /// date the principal plus interest is credited and the slot empties;
    /// on any other date the call fails with `FixedDepositLocked`.
    pub fn set_fixed_deposit(
        &mut self,
        amount: Money,
        rate: Option<Rate>,
    ) -> Result<FixedDepositOutcome> {
        let now = self.account.now();

        if let Some(deposit) = self.fixed_deposit.clone() {
            if !deposit.is_mature(now, self.config.maturity_rule) {
                return Err(deposit.locked_error());
            }
            return self.release_fixed_deposit(deposit);
        }

        let rate = rate.unwrap_or(self.interest_rate);
        let deposit = FixedDeposit::open(amount, rate, now, self.config.fixed_deposit_term_months)?;

        let outcome = FixedDepositOutcome::Opened {
            amount: deposit.amount(),
            rate: deposit.rate(),
            start_date: deposit.start_date().date_naive(),
            release_date: deposit.release_date().date_naive(),
            payout: deposit.payout(),
        };

        let account_id = self.account.id();
        self.account.events_mut().emit(Event::FixedDepositLocked {
            account_id,
            amount: deposit.amount(),
            rate: deposit.rate(),
            release_date: deposit.release_date().date_naive(),
            timestamp: now,
        });
        info!(
            "account {}: fixed deposit of {} at {} locked until {}",
            self.account.account_number(),
            deposit.amount().to_display(),
            deposit.rate(),
            deposit.release_date().date_naive()
        );

        self.interest_rate = rate;
        self.fixed_deposit = Some(deposit);

        Ok(outcome)
    }

    fn release_fixed_deposit(&mut self, deposit: FixedDeposit) -> Result<FixedDepositOutcome> {
        let payout = deposit.payout();
        self.account.deposit_labeled(payout, "fixed deposit matured")?;
        self.fixed_deposit = None;

        let timestamp = self.account.now();
        let account_id = self.account.id();
        self.account.events_mut().emit(Event::FixedDepositMatured {
            account_id,
            principal: deposit.amount(),
            interest: deposit.interest(),
            timestamp,
        });

        Ok(FixedDepositOutcome::Matured {
            principal: deposit.amount(),
            interest: deposit.interest(),
            payout,
        })
    }

    pub fn fixed_deposit(&self) -> Option<&FixedDeposit> {
        self.fixed_deposit.as_ref()
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
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
        crate::views::SavingsView::from_savings(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// builder for savings accounts
#[derive(Default)]
pub struct SavingsBuilder {
    inner: AccountBuilder,
    transaction_limit: Option<Money>,
    interest_rate: Option<Rate>,
}

impl SavingsBuilder {
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

    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn build(self) -> Result<SavingsAccount> {
        let config = self.inner.resolved_config()?;

        let limit = TransactionLimit::new(
            self.transaction_limit
                .unwrap_or(config.default_transaction_limit),
        )?;

        let interest_rate = self.interest_rate.unwrap_or(config.default_savings_rate);
        if !interest_rate.is_proper_fraction() {
            return Err(BankError::InvalidInterestRate { rate: interest_rate });
        }

        let account = self.inner.build_as(AccountKind::Savings)?;

        Ok(SavingsAccount {
            account,
            limit,
            interest_rate,
            fixed_deposit: None,
            config,
        })
    }
}
