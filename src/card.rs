use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::account::required;
use crate::auth::Secret;
use crate::config::BankConfig;
use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::events::{Event, EventStore};
use crate::ledger::Ledger;
use crate::payment::{PaymentPolicy, StandardPayment};
use crate::time::{system_time, SharedTime};
use crate::types::{CardKind, EntityId};
use crate::views::{BalanceInquiry, TransactionStatement};

/// label used when a payment names no service point
pub const UNKNOWN_SERVICE_POINT: &str = "Unknown";

/// payment card bound to an account number
///
/// A card carries its own balance and ledger; it does not move money in the
/// account it names. Every customer-facing operation is gated by the PIN,
/// which can only be tested or replaced, never read.
pub struct Card {
    id: EntityId,
    kind: CardKind,
    account_title: String,
    account_number: String,
    card_number: String,
    pin: Secret,
    balance: Money,
    ledger: Ledger,
    events: EventStore,
    time: SharedTime,
}

impl Card {
    pub fn builder() -> CardBuilder {
        CardBuilder::new()
    }

    pub fn check_code(&self, pin: &str) -> bool {
        self.pin.matches(pin)
    }

    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> Result<()> {
        self.verify_pin(old_pin)?;

        self.pin = Secret::new(new_pin);

        let timestamp = self.time.now();
        self.events.emit(Event::PinChanged {
            card_id: self.id,
            timestamp,
        });
        info!("card {}: pin changed", self.card_number);

        Ok(())
    }

    pub fn check_balance(&self, pin: &str) -> Result<BalanceInquiry> {
        self.verify_pin(pin)?;
        Ok(BalanceInquiry::from_card(self))
    }

    pub fn check_transactions(&self, pin: &str) -> Result<TransactionStatement> {
        self.verify_pin(pin)?;
        Ok(TransactionStatement::from_card(self))
    }

    /// pay from the card balance, which may not go negative
    pub fn make_payment(&mut self, pin: &str, amount: Money, service_point: &str) -> Result<Money> {
        self.settle_payment(pin, amount, service_point, &StandardPayment)
    }

    /// checks pin, amount and policy in that order, then records the payment
    pub(crate) fn settle_payment(
        &mut self,
        pin: &str,
        amount: Money,
        service_point: &str,
        policy: &dyn PaymentPolicy,
    ) -> Result<Money> {
        self.verify_pin(pin)?;
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }
        policy.authorize(self.balance, amount)?;
        let new_balance = self.balance.try_sub(amount)?;

        let service_point = if service_point.trim().is_empty() {
            UNKNOWN_SERVICE_POINT
        } else {
            service_point
        };

        let now = self.time.now();
        self.balance = new_balance;
        self.ledger.record(self.balance, -amount, now, service_point);

        self.events.emit(Event::PaymentMade {
            card_id: self.id,
            amount,
            service_point: service_point.to_string(),
            new_balance: self.balance,
            timestamp: now,
        });
        info!(
            "card {}: paid {} at {}, balance {}",
            self.card_number,
            amount.to_display(),
            service_point,
            self.balance.to_display()
        );

        Ok(self.balance)
    }

    pub(crate) fn verify_pin(&self, pin: &str) -> Result<()> {
        if self.pin.matches(pin) {
            Ok(())
        } else {
            warn!("card {}: invalid pin entered", self.card_number);
            Err(BankError::InvalidPin)
        }
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

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn account_title(&self) -> &str {
        &self.account_title
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
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

    pub fn json(&self) -> String {
        crate::views::CardView::from_card(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("account_number", &self.account_number)
            .field("card_number", &self.card_number)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// builder for cards, every identity field and the pin are required
#[derive(Default)]
pub struct CardBuilder {
    account_title: Option<String>,
    account_number: Option<String>,
    card_number: Option<String>,
    pin: Option<String>,
    initial_balance: Option<Money>,
    config: Option<BankConfig>,
    time_provider: Option<SharedTime>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(mut self, time: &SharedTime) -> Self {
        self.time_provider = Some(time.clone());
        self
    }

    pub fn account_title(mut self, title: impl Into<String>) -> Self {
        self.account_title = Some(title.into());
        self
    }

    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = Some(number.into());
        self
    }

    pub fn card_number(mut self, number: impl Into<String>) -> Self {
        self.card_number = Some(number.into());
        self
    }

    pub fn pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
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

    /// build a debit card
    pub fn build(self) -> Result<Card> {
        self.build_as(CardKind::Debit)
    }

    pub(crate) fn build_as(self, kind: CardKind) -> Result<Card> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let account_title = required(self.account_title, "account title")?;
        let account_number = required(self.account_number, "account number")?;
        let card_number = required(self.card_number, "card number")?;
        let pin = Secret::new(required(self.pin, "pin")?);

        let opening_balance = self.initial_balance.unwrap_or(Money::ZERO);
        if opening_balance.is_negative() {
            return Err(BankError::InvalidAmount { amount: opening_balance });
        }

        let time = self.time_provider.unwrap_or_else(system_time);
        let now = time.now();

        let mut ledger = Ledger::with_capacity(config.ledger_capacity);
        ledger.record(opening_balance, opening_balance, now, "card issued");

        let mut card = Card {
            id: Uuid::new_v4(),
            kind,
            account_title,
            account_number,
            card_number,
            pin,
            balance: opening_balance,
            ledger,
            events: EventStore::with_capacity(config.event_capacity),
            time,
        };

        card.events.emit(Event::CardIssued {
            card_id: card.id,
            card_number: card.card_number.clone(),
            account_number: card.account_number.clone(),
            kind,
            opening_balance,
            timestamp: now,
        });
        info!(
            "{:?} card {} issued on account {} with {}",
            kind,
            card.card_number,
            card.account_number,
            opening_balance.to_display()
        );

        Ok(card)
    }
}
