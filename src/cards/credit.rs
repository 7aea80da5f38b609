use std::sync::Arc;

use log::info;

use crate::auth::BranchAuthority;
use crate::card::{Card, CardBuilder};
use crate::config::BankConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{BankError, Result};
use crate::events::Event;
use crate::ledger::Ledger;
use crate::payment::{CreditLine, PaymentPolicy};
use crate::time::SharedTime;
use crate::types::{CardKind, LimitChange};
use crate::views::{BalanceInquiry, TransactionStatement};

/// card whose payments may overdraw the balance down to the credit limit
///
/// Changing the limit needs two factors: the branch manager code held by
/// the shared [`BranchAuthority`], then the customer's PIN.
#[derive(Debug)]
pub struct CreditCard {
    card: Card,
    credit: CreditLine,
    interest_rate: Rate,
    authority: Arc<BranchAuthority>,
}

impl CreditCard {
    pub fn builder() -> CreditCardBuilder {
        CreditCardBuilder::new()
    }

    /// succeeds while `amount <= balance + credit limit`; a sum outside the
    /// decimal range is refused with `AmountOutOfRange`
    pub fn make_payment(&mut self, pin: &str, amount: Money, service_point: &str) -> Result<Money> {
        self.card.settle_payment(pin, amount, service_point, &self.credit)
    }

    pub fn set_credit_limit(
        &mut self,
        pin: &str,
        manager_code: Option<&str>,
        new_limit: Money,
    ) -> Result<LimitChange> {
        self.authority.verify(manager_code)?;
        self.card.verify_pin(pin)?;
        let change = self.credit.change(new_limit)?;

        let timestamp = self.card.now();
        let card_id = self.card.id();
        self.card.events_mut().emit(Event::CreditLimitChanged {
            card_id,
            change,
            timestamp,
        });
        info!(
            "card {}: credit limit now {}",
            self.card.card_number(),
            change.current().to_display()
        );

        Ok(change)
    }

    pub fn check_credit_limit(&self, pin: &str) -> Result<Money> {
        self.card.verify_pin(pin)?;
        Ok(self.credit.limit())
    }

    /// remaining spending power, balance plus credit limit
    pub fn available_credit(&self) -> Result<Money> {
        self.credit.spending_power(self.card.balance())
    }

    pub fn check_code(&self, pin: &str) -> bool {
        self.card.check_code(pin)
    }

    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> Result<()> {
        self.card.change_pin(old_pin, new_pin)
    }

    pub fn check_balance(&self, pin: &str) -> Result<BalanceInquiry> {
        self.card.check_balance(pin)
    }

    pub fn check_transactions(&self, pin: &str) -> Result<TransactionStatement> {
        self.card.check_transactions(pin)
    }

    pub fn credit_limit(&self) -> Money {
        self.credit.limit()
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn balance(&self) -> Money {
        self.card.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        self.card.ledger()
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn events(&self) -> &[Event] {
        self.card.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.card.take_events()
    }

    pub fn json(&self) -> String {
        crate::views::CreditCardView::from_credit_card(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// builder for credit cards
#[derive(Default)]
pub struct CreditCardBuilder {
    inner: CardBuilder,
    credit_limit: Option<Money>,
    interest_rate: Option<Rate>,
    authority: Option<Arc<BranchAuthority>>,
}

impl CreditCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(mut self, time: &SharedTime) -> Self {
        self.inner = self.inner.set_time(time);
        self
    }

    pub fn account_title(mut self, title: impl Into<String>) -> Self {
        self.inner = self.inner.account_title(title);
        self
    }

    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.inner = self.inner.account_number(number);
        self
    }

    pub fn card_number(mut self, number: impl Into<String>) -> Self {
        self.inner = self.inner.card_number(number);
        self
    }

    pub fn pin(mut self, pin: impl Into<String>) -> Self {
        self.inner = self.inner.pin(pin);
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

    pub fn credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn authority(mut self, authority: &Arc<BranchAuthority>) -> Self {
        self.authority = Some(Arc::clone(authority));
        self
    }

    pub fn build(self) -> Result<CreditCard> {
        let authority = self
            .authority
            .ok_or(BankError::MissingField { field: "branch authority" })?;

        let credit = CreditLine::new(self.credit_limit.unwrap_or(Money::ZERO))?;

        let interest_rate = self.interest_rate.unwrap_or(Rate::ZERO);
        if interest_rate < Rate::ZERO {
            return Err(BankError::InvalidInterestRate { rate: interest_rate });
        }

        let card = self.inner.build_as(CardKind::Credit)?;

        Ok(CreditCard {
            card,
            credit,
            interest_rate,
            authority,
        })
    }
}
