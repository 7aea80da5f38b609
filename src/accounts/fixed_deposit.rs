use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MaturityRule;
use crate::decimal::{Money, Rate};
use crate::errors::{BankError, Result};

/// a locked savings deposit that pays simple interest once, at release
///
/// Interest and payout are fixed when the deposit opens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedDeposit {
    amount: Money,
    rate: Rate,
    interest: Money,
    payout: Money,
    start_date: DateTime<Utc>,
    release_date: DateTime<Utc>,
}

impl FixedDeposit {
    pub(crate) fn open(
        amount: Money,
        rate: Rate,
        start_date: DateTime<Utc>,
        term_months: u32,
    ) -> Result<Self> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount { amount });
        }
        if !rate.is_proper_fraction() {
            return Err(BankError::InvalidInterestRate { rate });
        }

        let interest = amount.interest_at(rate)?;
        let payout = amount.try_add(interest)?;

        let release_date = start_date
            .checked_add_months(Months::new(term_months))
            .ok_or_else(|| BankError::InvalidDate {
                message: format!("{} months after {} is out of range", term_months, start_date),
            })?;

        Ok(Self {
            amount,
            rate,
            interest,
            payout,
            start_date,
            release_date,
        })
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    pub fn interest(&self) -> Money {
        self.interest
    }

    /// principal plus interest credited on release
    pub fn payout(&self) -> Money {
        self.payout
    }

    /// compares calendar dates, the time of day is ignored
    pub fn is_mature(&self, now: DateTime<Utc>, rule: MaturityRule) -> bool {
        let today = now.date_naive();
        let release = self.release_date.date_naive();
        match rule {
            MaturityRule::ExactDate => today == release,
            MaturityRule::OnOrAfter => today >= release,
        }
    }

    pub(crate) fn locked_error(&self) -> BankError {
        BankError::FixedDepositLocked {
            amount: self.amount,
            rate: self.rate,
            release_date: self.release_date.date_naive(),
        }
    }
}

/// what a call to `set_fixed_deposit` did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FixedDepositOutcome {
    Opened {
        amount: Money,
        rate: Rate,
        start_date: NaiveDate,
        release_date: NaiveDate,
        payout: Money,
    },
    Matured {
        principal: Money,
        interest: Money,
        payout: Money,
    },
}
