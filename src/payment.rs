//! Payment policies decide how far a card may spend below its balance.
//!
//! Debit cards use [`StandardPayment`], which never lets the balance go
//! negative. Credit cards use [`CreditLine`], which allows an overdraft down
//! to minus the credit limit.

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{BankError, Result};
use crate::limits::TransactionLimit;
use crate::types::LimitChange;

pub trait PaymentPolicy {
    /// largest single payment the policy allows at `balance`
    fn spending_power(&self, balance: Money) -> Result<Money>;

    fn authorize(&self, balance: Money, amount: Money) -> Result<()> {
        let available = self.spending_power(balance)?;
        if amount > available {
            return Err(BankError::InsufficientFunds {
                available,
                requested: amount,
            });
        }
        Ok(())
    }
}

/// pay only from the balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPayment;

impl PaymentPolicy for StandardPayment {
    fn spending_power(&self, balance: Money) -> Result<Money> {
        Ok(balance)
    }
}

/// pay from the balance plus a credit limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLine {
    limit: TransactionLimit,
}

impl CreditLine {
    pub fn new(limit: Money) -> Result<Self> {
        Ok(Self {
            limit: TransactionLimit::new(limit)?,
        })
    }

    pub fn limit(&self) -> Money {
        self.limit.amount()
    }

    pub fn change(&mut self, new_limit: Money) -> Result<LimitChange> {
        self.limit.change(new_limit)
    }
}

impl PaymentPolicy for CreditLine {
    fn spending_power(&self, balance: Money) -> Result<Money> {
        balance.try_add(self.limit.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_payment() {
        let policy = StandardPayment;
        assert!(policy.authorize(Money::from_major(100), Money::from_major(100)).is_ok());
        assert_eq!(
            policy.authorize(Money::from_major(100), Money::from_major(101)),
            Err(BankError::InsufficientFunds {
                available: Money::from_major(100),
                requested: Money::from_major(101),
            })
        );
    }

    #[test]
    fn test_credit_line_extends_spending() {
        let line = CreditLine::new(Money::from_major(200)).unwrap();
        assert_eq!(line.spending_power(Money::ZERO).unwrap(), Money::from_major(200));
        assert_eq!(
            line.spending_power(-Money::from_major(150)).unwrap(),
            Money::from_major(50)
        );
        assert!(line.authorize(-Money::from_major(150), Money::from_major(100)).is_err());
        assert!(line.authorize(-Money::from_major(150), Money::from_major(50)).is_ok());
    }

    #[test]
    fn test_credit_line_rejects_negative_limit() {
        assert!(CreditLine::new(-Money::ONE).is_err());
        let mut line = CreditLine::new(Money::ZERO).unwrap();
        assert!(matches!(line.change(-Money::ONE), Err(BankError::InvalidLimit { .. })));
        assert_eq!(line.limit(), Money::ZERO);
    }

    #[test]
    fn test_credit_line_overflow_is_an_error() {
        let max = Money::from_decimal(rust_decimal::Decimal::MAX);
        let line = CreditLine::new(max).unwrap();
        assert_eq!(
            line.authorize(Money::ONE, Money::from_major(5)),
            Err(BankError::AmountOutOfRange { amount: max })
        );
        assert!(line.authorize(Money::ZERO, Money::from_major(5)).is_ok());
    }

    #[test]
    fn test_credit_line_deserialize_checks_limit() {
        let line: CreditLine = serde_json::from_str(r#"{ "limit": "200" }"#).unwrap();
        assert_eq!(line.limit(), Money::from_major(200));

        let result = serde_json::from_str::<CreditLine>(r#"{ "limit": "-1" }"#);
        assert!(result.is_err());
    }
}
