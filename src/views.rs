//! serializable read-only views of accounts and cards
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::accounts::{ChequingAccount, SavingsAccount};
use crate::card::Card;
use crate::cards::CreditCard;
use crate::decimal::{Money, Rate};
use crate::ledger::{BalanceEntry, Ledger, TransactionEntry};
use crate::types::{AccountKind, CardKind, EntityId};

/// serializable view of an account's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: EntityId,
    pub kind: AccountKind,
    pub holder: String,
    pub account_number: String,
    pub balance: Money,
    pub history: HistoryView,
}

/// both ledger windows, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryView {
    pub capacity: usize,
    pub balances: Vec<BalanceEntry>,
    pub transactions: Vec<TransactionEntry>,
}

impl HistoryView {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        HistoryView {
            capacity: ledger.capacity(),
            balances: ledger.balance_history().cloned().collect(),
            transactions: ledger.transaction_history().cloned().collect(),
        }
    }
}

impl AccountView {
    pub fn from_account(account: &Account) -> Self {
        AccountView {
            id: account.id(),
            kind: account.kind(),
            holder: account.holder().to_string(),
            account_number: account.account_number().to_string(),
            balance: account.balance(),
            history: HistoryView::from_ledger(account.ledger()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositView {
    pub amount: Money,
    pub rate: Rate,
    pub start_date: NaiveDate,
    pub release_date: NaiveDate,
    pub payout: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsView {
    pub account: AccountView,
    pub transaction_limit: Money,
    pub interest_rate: Rate,
    pub fixed_deposit: Option<FixedDepositView>,
}

impl SavingsView {
    pub fn from_savings(savings: &SavingsAccount) -> Self {
        SavingsView {
            account: AccountView::from_account(savings.account()),
            transaction_limit: savings.transaction_limit(),
            interest_rate: savings.interest_rate(),
            fixed_deposit: savings.fixed_deposit().map(|deposit| FixedDepositView {
                amount: deposit.amount(),
                rate: deposit.rate(),
                start_date: deposit.start_date().date_naive(),
                release_date: deposit.release_date().date_naive(),
                payout: deposit.payout(),
            }),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChequingView {
    pub account: AccountView,
    pub transaction_limit: Money,
}

impl ChequingView {
    pub fn from_chequing(chequing: &ChequingAccount) -> Self {
        ChequingView {
            account: AccountView::from_account(chequing.account()),
            transaction_limit: chequing.transaction_limit(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// card state without the pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: EntityId,
    pub kind: CardKind,
    pub account_title: String,
    pub account_number: String,
    pub card_number: String,
    pub balance: Money,
    pub history: HistoryView,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        CardView {
            id: card.id(),
            kind: card.kind(),
            account_title: card.account_title().to_string(),
            account_number: card.account_number().to_string(),
            card_number: card.card_number().to_string(),
            balance: card.balance(),
            history: HistoryView::from_ledger(card.ledger()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardView {
    pub card: CardView,
    pub credit_limit: Money,
    pub interest_rate: Rate,
    /// absent when balance plus limit leaves the representable range
    pub available_credit: Option<Money>,
}

impl CreditCardView {
    pub fn from_credit_card(credit: &CreditCard) -> Self {
        CreditCardView {
            card: CardView::from_card(credit.card()),
            credit_limit: credit.credit_limit(),
            interest_rate: credit.interest_rate(),
            available_credit: credit.available_credit().ok(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// answer to a pin-verified balance check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInquiry {
    pub holder: String,
    pub card_number: String,
    pub balance: Money,
}

impl BalanceInquiry {
    pub(crate) fn from_card(card: &Card) -> Self {
        BalanceInquiry {
            holder: card.account_title().to_string(),
            card_number: card.card_number().to_string(),
            balance: card.balance(),
        }
    }
}

/// answer to a pin-verified transaction history request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatement {
    pub holder: String,
    pub card_number: String,
    pub balance: Money,
    pub transactions: Vec<TransactionEntry>,
}

impl TransactionStatement {
    pub(crate) fn from_card(card: &Card) -> Self {
        TransactionStatement {
            holder: card.account_title().to_string(),
            card_number: card.card_number().to_string(),
            balance: card.balance(),
            transactions: card.ledger().transaction_history().cloned().collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BranchAuthority;
    use crate::time::test_time;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_savings_view_includes_fixed_deposit() {
        let time = test_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut savings = SavingsAccount::builder()
            .holder("Grace Hopper")
            .account_number("SAV-001")
            .initial_balance(Money::from_major(1000))
            .set_time(&time)
            .build()
            .unwrap();
        savings
            .set_fixed_deposit(Money::from_major(500), Some(Rate::from_decimal(dec!(0.02))))
            .unwrap();

        let view = SavingsView::from_savings(&savings);
        let deposit = view.fixed_deposit.clone().unwrap();
        assert_eq!(deposit.payout, Money::from_major(510));
        assert_eq!(deposit.release_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(view.account.history.transactions.len(), 1);

        let json = view.to_json_pretty().unwrap();
        let parsed: SavingsView = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, view);
    }

    #[test]
    fn test_card_json_never_contains_pin() {
        let authority = BranchAuthority::shared("mgr-qx").unwrap();
        let card = CreditCard::builder()
            .account_title("Ada Lovelace")
            .account_number("ACC-001")
            .card_number("5500-0000-0000-0004")
            .pin("zz97")
            .credit_limit(Money::from_major(200))
            .authority(&authority)
            .set_time(&test_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
            .build()
            .unwrap();

        let json = card.json();
        assert!(json.contains("5500-0000-0000-0004"));
        assert!(json.contains("available_credit"));
        assert!(!json.contains("zz97"));
        assert!(!json.contains("mgr-qx"));
    }
}
