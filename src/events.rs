use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_EVENT_CAPACITY;
use crate::decimal::{Money, Rate};
use crate::types::{AccountKind, CardKind, EntityId, LimitChange};

/// all events that accounts and cards can emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // account events
    AccountOpened {
        account_id: EntityId,
        account_number: String,
        kind: AccountKind,
        opening_balance: Money,
        timestamp: DateTime<Utc>,
    },
    Deposited {
        account_id: EntityId,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    Withdrawn {
        account_id: EntityId,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    TransactionLimitChanged {
        account_id: EntityId,
        change: LimitChange,
        timestamp: DateTime<Utc>,
    },

    // fixed deposit events
    FixedDepositLocked {
        account_id: EntityId,
        amount: Money,
        rate: Rate,
        release_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    FixedDepositMatured {
        account_id: EntityId,
        principal: Money,
        interest: Money,
        timestamp: DateTime<Utc>,
    },

    // card events
    CardIssued {
        card_id: EntityId,
        card_number: String,
        account_number: String,
        kind: CardKind,
        opening_balance: Money,
        timestamp: DateTime<Utc>,
    },
    PaymentMade {
        card_id: EntityId,
        amount: Money,
        service_point: String,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    PinChanged {
        card_id: EntityId,
        timestamp: DateTime<Utc>,
    },
    CreditLimitChanged {
        card_id: EntityId,
        change: LimitChange,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
///
/// Events accumulate until drained with `take_events`. The store keeps at
/// most `capacity` of them; once full, each new event drops the oldest.
#[derive(Debug)]
pub struct EventStore {
    capacity: usize,
    events: Vec<Event>,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// capacity is clamped to at least one event
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        if self.events.len() >= self.capacity {
            let evicted = self.events.remove(0);
            debug!("event store full, dropped {:?}", evicted);
        }
        self.events.push(event);
    }

    /// hand over every pending event and leave the store empty
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn pin_changed(minute: u32) -> Event {
        Event::PinChanged {
            card_id: Uuid::nil(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_store_drops_oldest_when_full() {
        let mut store = EventStore::with_capacity(3);
        for minute in 1..=5 {
            store.emit(pin_changed(minute));
        }

        assert_eq!(store.events().len(), 3);
        assert_eq!(store.events()[0], pin_changed(3));
        assert_eq!(store.events()[2], pin_changed(5));
    }

    #[test]
    fn test_take_events_drains() {
        let mut store = EventStore::new();
        assert_eq!(store.capacity(), DEFAULT_EVENT_CAPACITY);
        store.emit(pin_changed(1));
        store.emit(pin_changed(2));

        assert_eq!(store.take_events().len(), 2);
        assert!(store.events().is_empty());

        store.emit(pin_changed(3));
        assert_eq!(store.events(), &[pin_changed(3)]);
    }
}
