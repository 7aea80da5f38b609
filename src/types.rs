use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// internal identifier for an account or card
pub type EntityId = Uuid;

/// account kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Basic,
    Savings,
    Chequing,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Basic => write!(f, "Basic"),
            AccountKind::Savings => write!(f, "Savings"),
            AccountKind::Chequing => write!(f, "Chequing"),
        }
    }
}

/// card kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Debit,
    Credit,
}

/// outcome of a limit change (transaction limit or credit limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitChange {
    Increased { from: Money, to: Money },
    Decreased { from: Money, to: Money },
    Unchanged { limit: Money },
}

impl LimitChange {
    pub fn between(old: Money, new: Money) -> Self {
        if new > old {
            LimitChange::Increased { from: old, to: new }
        } else if new < old {
            LimitChange::Decreased { from: old, to: new }
        } else {
            LimitChange::Unchanged { limit: old }
        }
    }

    /// limit in force after the change
    pub fn current(&self) -> Money {
        match self {
            LimitChange::Increased { to, .. } | LimitChange::Decreased { to, .. } => *to,
            LimitChange::Unchanged { limit } => *limit,
        }
    }
}
