use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("missing required field: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("amount out of range: {amount}")]
    AmountOutOfRange {
        amount: Money,
    },

    #[error("invalid limit: {limit}")]
    InvalidLimit {
        limit: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("transaction limit exceeded: limit {limit}, requested {requested}")]
    TransactionLimitExceeded {
        limit: Money,
        requested: Money,
    },

    #[error("invalid pin")]
    InvalidPin,

    #[error("branch manager authorization required")]
    ManagerCodeMissing,

    #[error("invalid branch manager code")]
    InvalidManagerCode,

    #[error("fixed deposit of {amount} at {rate} is locked until {release_date}")]
    FixedDepositLocked {
        amount: Money,
        rate: Rate,
        release_date: NaiveDate,
    },
}

/// broad error classes callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InsufficientFunds,
    LimitExceeded,
    Authorization(AuthFactor),
    StateConflict,
}

/// which authorization factor was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFactor {
    Pin,
    ManagerCode,
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::MissingField { .. }
            | BankError::InvalidAmount { .. }
            | BankError::AmountOutOfRange { .. }
            | BankError::InvalidLimit { .. }
            | BankError::InvalidInterestRate { .. }
            | BankError::InvalidConfiguration { .. }
            | BankError::InvalidDate { .. } => ErrorKind::Validation,
            BankError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            BankError::TransactionLimitExceeded { .. } => ErrorKind::LimitExceeded,
            BankError::InvalidPin => ErrorKind::Authorization(AuthFactor::Pin),
            BankError::ManagerCodeMissing | BankError::InvalidManagerCode => {
                ErrorKind::Authorization(AuthFactor::ManagerCode)
            }
            BankError::FixedDepositLocked { .. } => ErrorKind::StateConflict,
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(BankError::InvalidPin.kind(), ErrorKind::Authorization(AuthFactor::Pin));
        assert_eq!(
            BankError::ManagerCodeMissing.kind(),
            ErrorKind::Authorization(AuthFactor::ManagerCode)
        );
        assert_eq!(
            BankError::TransactionLimitExceeded {
                limit: Money::from_major(100),
                requested: Money::from_major(150),
            }
            .kind(),
            ErrorKind::LimitExceeded
        );
        assert_eq!(
            BankError::MissingField { field: "pin" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            BankError::AmountOutOfRange { amount: Money::ONE }.kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_error_messages() {
        let err = BankError::InsufficientFunds {
            available: Money::from_major(50),
            requested: Money::from_major(80),
        };
        assert_eq!(err.to_string(), "insufficient funds: available 50, requested 80");
    }
}
