pub mod account;
pub mod accounts;
pub mod auth;
pub mod card;
pub mod cards;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod limits;
pub mod payment;
pub mod time;
pub mod types;
pub mod views;

// re-export key types
pub use account::{Account, AccountBuilder};
pub use accounts::{
    ChequingAccount, ChequingBuilder, FixedDeposit, FixedDepositOutcome, SavingsAccount,
    SavingsBuilder,
};
pub use auth::{BranchAuthority, Secret};
pub use card::{Card, CardBuilder, UNKNOWN_SERVICE_POINT};
pub use cards::{CreditCard, CreditCardBuilder};
pub use config::{BankConfig, MaturityRule, DEFAULT_EVENT_CAPACITY, DEFAULT_LEDGER_CAPACITY};
pub use decimal::{Money, Rate};
pub use errors::{AuthFactor, BankError, ErrorKind, Result};
pub use events::{Event, EventStore};
pub use ledger::{BalanceEntry, Ledger, TransactionEntry};
pub use limits::TransactionLimit;
pub use payment::{CreditLine, PaymentPolicy, StandardPayment};
pub use time::{system_time, test_time, SharedTime};
pub use types::{AccountKind, CardKind, EntityId, LimitChange};
pub use views::{
    AccountView, BalanceInquiry, CardView, ChequingView, CreditCardView, FixedDepositView,
    HistoryView, SavingsView, TransactionStatement,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
