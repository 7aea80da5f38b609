//! Bounded balance and transaction history.
//!
//! Both histories are sliding windows: once a history holds `capacity`
//! entries, recording a new one drops the oldest first. The two windows are
//! evicted independently, though accounts and cards always append to both
//! together.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LEDGER_CAPACITY;
use crate::decimal::Money;

/// balance after a mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub balance: Money,
    pub timestamp: DateTime<Utc>,
}

/// signed transaction amount, negative for money leaving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    /// service point for card payments, otherwise a short description
    pub label: String,
}

/// bounded history; serialize only, entries are appended through `record`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    capacity: usize,
    balance_history: VecDeque<BalanceEntry>,
    transaction_history: VecDeque<TransactionEntry>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LEDGER_CAPACITY)
    }

    /// capacity is clamped to at least one entry
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            balance_history: VecDeque::with_capacity(capacity),
            transaction_history: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record_balance(&mut self, balance: Money, timestamp: DateTime<Utc>) {
        if self.balance_history.len() >= self.capacity {
            if let Some(evicted) = self.balance_history.pop_front() {
                debug!("ledger evicted balance snapshot {} from {}", evicted.balance, evicted.timestamp);
            }
        }
        self.balance_history.push_back(BalanceEntry { balance, timestamp });
    }

    pub fn record_transaction(
        &mut self,
        amount: Money,
        timestamp: DateTime<Utc>,
        label: impl Into<String>,
    ) {
        if self.transaction_history.len() >= self.capacity {
            if let Some(evicted) = self.transaction_history.pop_front() {
                debug!("ledger evicted transaction {} from {}", evicted.amount, evicted.timestamp);
            }
        }
        self.transaction_history.push_back(TransactionEntry {
            amount,
            timestamp,
            label: label.into(),
        });
    }

    /// record both sides of one balance mutation
    pub fn record(
        &mut self,
        new_balance: Money,
        signed_amount: Money,
        timestamp: DateTime<Utc>,
        label: impl Into<String>,
    ) {
        self.record_balance(new_balance, timestamp);
        self.record_transaction(signed_amount, timestamp, label);
    }

    /// oldest first
    pub fn balance_history(&self) -> impl ExactSizeIterator<Item = &BalanceEntry> + '_ {
        self.balance_history.iter()
    }

    /// oldest first
    pub fn transaction_history(&self) -> impl ExactSizeIterator<Item = &TransactionEntry> + '_ {
        self.transaction_history.iter()
    }

    pub fn balance_len(&self) -> usize {
        self.balance_history.len()
    }

    pub fn transaction_len(&self) -> usize {
        self.transaction_history.len()
    }

    pub fn latest_balance(&self) -> Option<&BalanceEntry> {
        self.balance_history.back()
    }

    pub fn latest_transaction(&self) -> Option<&TransactionEntry> {
        self.transaction_history.back()
    }
}
