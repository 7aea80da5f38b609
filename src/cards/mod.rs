pub mod credit;

pub use credit::{CreditCard, CreditCardBuilder};
