use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{BankError, Result};

/// entries kept in each ledger history
pub const DEFAULT_LEDGER_CAPACITY: usize = 30;

/// undrained events kept per account or card
pub const DEFAULT_EVENT_CAPACITY: usize = 1000;

/// how a locked fixed deposit decides it has matured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MaturityRule {
    /// released only when checked on the exact release date
    #[default]
    ExactDate,
    /// released on any check made on or after the release date
    OnOrAfter,
}

/// bank-wide configuration shared by accounts and cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub ledger_capacity: usize,
    pub event_capacity: usize,
    pub default_transaction_limit: Money,
    pub default_savings_rate: Rate,
    pub fixed_deposit_term_months: u32,
    pub maturity_rule: MaturityRule,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            ledger_capacity: DEFAULT_LEDGER_CAPACITY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            default_transaction_limit: Money::from_major(1000),
            default_savings_rate: Rate::from_decimal(dec!(0.01)),
            fixed_deposit_term_months: 12,
            maturity_rule: MaturityRule::ExactDate,
        }
    }
}

impl BankConfig {
    /// parse from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BankConfig =
            serde_json::from_str(json).map_err(|e| BankError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.ledger_capacity == 0 {
            return Err(BankError::InvalidConfiguration {
                message: "ledger capacity must be at least 1".to_string(),
            });
        }

        if self.event_capacity == 0 {
            return Err(BankError::InvalidConfiguration {
                message: "event capacity must be at least 1".to_string(),
            });
        }

        if self.default_transaction_limit.is_negative() {
            return Err(BankError::InvalidLimit {
                limit: self.default_transaction_limit,
            });
        }

        if !self.default_savings_rate.is_proper_fraction() {
            return Err(BankError::InvalidInterestRate {
                rate: self.default_savings_rate,
            });
        }

        if self.fixed_deposit_term_months == 0 {
            return Err(BankError::InvalidConfiguration {
                message: "fixed deposit term must be at least one month".to_string(),
            });
        }

        Ok(())
    }

    pub fn with_maturity_rule(mut self, rule: MaturityRule) -> Self {
        self.maturity_rule = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BankConfig::default();
        assert_eq!(config.ledger_capacity, 30);
        assert_eq!(config.event_capacity, 1000);
        assert_eq!(config.default_transaction_limit, Money::from_major(1000));
        assert_eq!(config.default_savings_rate, Rate::from_decimal(dec!(0.01)));
        assert_eq!(config.maturity_rule, MaturityRule::ExactDate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = BankConfig::from_json(r#"{ "maturity_rule": "OnOrAfter", "ledger_capacity": 10 }"#)
            .unwrap();
        assert_eq!(config.maturity_rule, MaturityRule::OnOrAfter);
        assert_eq!(config.ledger_capacity, 10);
        assert_eq!(config.fixed_deposit_term_months, 12);
    }

    #[test]
    fn test_invalid_json() {
        let result = BankConfig::from_json(r#"{ "ledger_capacity": 0 }"#);
        assert!(matches!(result, Err(BankError::InvalidConfiguration { .. })));

        let result = BankConfig::from_json(r#"{ "event_capacity": 0 }"#);
        assert!(matches!(result, Err(BankError::InvalidConfiguration { .. })));

        let result = BankConfig::from_json("not json");
        assert!(matches!(result, Err(BankError::InvalidConfiguration { .. })));

        let result = BankConfig::from_json(r#"{ "default_savings_rate": "1.5" }"#);
        assert!(matches!(result, Err(BankError::InvalidInterestRate { .. })));
    }
}
