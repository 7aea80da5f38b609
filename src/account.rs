use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use crate::config::BankConfig;
use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::events::{Event, EventStore};
use crate::ledger::Ledger;
use crate::time::{system_time, SharedTime};
use crate::types::{AccountKind, EntityId};

/// core account: identity, balance and ledger
///
/// Savings and chequing accounts wrap this type and add their own checks
/// in front of `withdraw`. The base account only guards against overdraft.
pub struct Account {
    id: EntityId,
    kind: AccountKind,
    holder: String,
    account_number: String,
    balance: Money,
    ledger: Ledger,
    events: EventStore,
    time: SharedTime,
}

impl Account {
    /// builder for creating accounts
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    /// deposit a positive amount
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        self.deposit_labeled(amount, "deposit")
    }

    /// withdraw a positive amount no larger than the balance
    pub fn withdraw(&mut self, amount: Money) -> Result<Money> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }
        self.check_funds(amount)?;
        self.apply_withdrawal(amount, "withdrawal")
    }

    pub(crate) fn deposit_labeled(&mut self, amount: Money, label: &str) -> Result<Money> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }

        let new_balance = self.balance.try_add(amount)?;

        let now = self.now();
        self.balance = new_balance;
        self.ledger.record(self.balance, amount, now, label);

        self.events.emit(Event::Deposited {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            timestamp: now,
        });
        info!(
            "account {}: {} of {}, balance {}",
            self.account_number,
            label,
            amount.to_display(),
            self.balance.to_display()
        );

        Ok(self.balance)
    }

    pub(crate) fn check_funds(&self, amount: Money) -> Result<()> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        Ok(())
    }

    /// callers have already validated the amount
    pub(crate) fn apply_withdrawal(&mut self, amount: Money, label: &str) -> Result<Money> {
        let new_balance = self.balance.try_sub(amount)?;

        let now = self.now();
        self.balance = new_balance;
        self.ledger.record(self.balance, -amount, now, label);

        self.events.emit(Event::Withdrawn {
            account_id: self.id,
            amount,
            new_balance: self.balance,
            timestamp: now,
        });
        info!(
            "account {}: {} of {}, balance {}",
            self.account_number,
            label,
            amount.to_display(),
            self.balance.to_display()
        );

        Ok(self.balance)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    pub(crate) fn events_mut(&mut self) -> &mut EventStore {
        &mut self.events
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        let view = crate::views::AccountView::from_account(self);
        view.to_json_pretty().unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("holder", &self.holder)
            .field("account_number", &self.account_number)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// builder for accounts
#[derive(Default)]
pub struct AccountBuilder {
    holder: Option<String>,
    account_number: Option<String>,
    initial_balance: Option<Money>,
    config: Option<BankConfig>,
    time_provider: Option<SharedTime>,
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(mut self, time: &SharedTime) -> Self {
        self.time_provider = Some(time.clone());
        self
    }

    pub fn holder(mut self, name: impl Into<String>) -> Self {
        self.holder = Some(name.into());
        self
    }

    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = Some(number.into());
        self
    }

    pub fn initial_balance(mut self, amount: Money) -> Self {
        self.initial_balance = Some(amount);
        self
    }

    pub fn config(mut self, config: BankConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// build a basic account
    pub fn build(self) -> Result<Account> {
        self.build_as(AccountKind::Basic)
    }

    pub(crate) fn resolved_config(&self) -> Result<BankConfig> {
        let config = self.config.clone().unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn build_as(self, kind: AccountKind) -> Result<Account> {
        let config = self.resolved_config()?;

        let holder = required(self.holder, "account holder")?;
        let account_number = required(self.account_number, "account number")?;

        let opening_balance = self.initial_balance.unwrap_or(Money::ZERO);
        if opening_balance.is_negative() {
            return Err(BankError::InvalidAmount { amount: opening_balance });
        }

        let time = self.time_provider.unwrap_or_else(system_time);
        let now = time.now();

        let mut ledger = Ledger::with_capacity(config.ledger_capacity);
        ledger.record(opening_balance, opening_balance, now, "account opened");

        let mut account = Account {
            id: Uuid::new_v4(),
            kind,
            holder,
            account_number,
            balance: opening_balance,
            ledger,
            events: EventStore::with_capacity(config.event_capacity),
            time,
        };

        account.events.emit(Event::AccountOpened {
            account_id: account.id,
            account_number: account.account_number.clone(),
            kind,
            opening_balance,
            timestamp: now,
        });
        info!(
            "{} account {} opened for {} with {}",
            kind,
            account.account_number,
            account.holder,
            opening_balance.to_display()
        );

        Ok(account)
    }
}

/// blank strings count as missing
pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BankError::MissingField { field }),
    }
}
