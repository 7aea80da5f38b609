use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::types::LimitChange;

/// maximum single withdrawal, independent of the available balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct TransactionLimit {
    limit: Money,
}

impl TransactionLimit {
    pub fn new(limit: Money) -> Result<Self> {
        if limit.is_negative() {
            return Err(BankError::InvalidLimit { limit });
        }
        Ok(Self { limit })
    }

    pub fn amount(&self) -> Money {
        self.limit
    }

    pub fn check(&self, requested: Money) -> Result<()> {
        if requested > self.limit {
            return Err(BankError::TransactionLimitExceeded {
                limit: self.limit,
                requested,
            });
        }
        Ok(())
    }

    /// replace the limit, reporting which way it moved
    pub fn change(&mut self, new_limit: Money) -> Result<LimitChange> {
        if new_limit.is_negative() {
            return Err(BankError::InvalidLimit { limit: new_limit });
        }
        let change = LimitChange::between(self.limit, new_limit);
        self.limit = new_limit;
        Ok(change)
    }
}

impl TryFrom<Money> for TransactionLimit {
    type Error = BankError;

    fn try_from(limit: Money) -> Result<Self> {
        TransactionLimit::new(limit)
    }
}

impl From<TransactionLimit> for Money {
    fn from(limit: TransactionLimit) -> Money {
        limit.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        let limit = TransactionLimit::new(Money::from_major(100)).unwrap();
        assert!(limit.check(Money::from_major(100)).is_ok());
        assert_eq!(
            limit.check(Money::from_major(150)),
            Err(BankError::TransactionLimitExceeded {
                limit: Money::from_major(100),
                requested: Money::from_major(150),
            })
        );
    }

    #[test]
    fn test_change_rejects_negative() {
        let mut limit = TransactionLimit::new(Money::from_major(100)).unwrap();
        let result = limit.change(-Money::from_major(1));
        assert!(matches!(result, Err(BankError::InvalidLimit { .. })));
        assert_eq!(limit.amount(), Money::from_major(100));
    }

    #[test]
    fn test_change_reports_direction() {
        let mut limit = TransactionLimit::new(Money::from_major(100)).unwrap();
        assert!(matches!(limit.change(Money::from_major(500)).unwrap(), LimitChange::Increased { .. }));
        assert!(matches!(limit.change(Money::ZERO).unwrap(), LimitChange::Decreased { .. }));
        assert_eq!(
            limit.change(Money::ZERO).unwrap(),
            LimitChange::Unchanged { limit: Money::ZERO }
        );
        assert_eq!(limit.amount(), Money::ZERO);
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let limit: TransactionLimit = serde_json::from_str(r#""100""#).unwrap();
        assert_eq!(limit.amount(), Money::from_major(100));
        assert_eq!(serde_json::to_string(&limit).unwrap(), r#""100""#);

        assert!(serde_json::from_str::<TransactionLimit>(r#""-5""#).is_err());
    }

    #[test]
    fn test_negative_initial_limit() {
        assert!(TransactionLimit::new(-Money::from_major(5)).is_err());
        assert!(TransactionLimit::new(Money::ZERO).is_ok());
    }
}
