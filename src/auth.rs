//! Customer PINs and the branch manager code.
//!
//! Secrets are compared by equality only. They have no accessor, no
//! `Display`, and a redacted `Debug`, so the only way to learn anything about
//! one is to test a candidate against it.

use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::errors::{BankError, Result};

/// an opaque secret such as a card PIN
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// holds the branch manager code that gates credit limit changes
///
/// One authority is created per branch and shared by every credit card it
/// issues, so rotating the code is a matter of building a new authority.
#[derive(Debug)]
pub struct BranchAuthority {
    manager_code: Secret,
}

impl BranchAuthority {
    pub fn new(manager_code: impl Into<String>) -> Result<Self> {
        let manager_code = Secret::new(manager_code);
        if manager_code.is_blank() {
            return Err(BankError::MissingField { field: "manager code" });
        }
        Ok(Self { manager_code })
    }

    /// new authority behind an `Arc`, ready to hand to card builders
    pub fn shared(manager_code: impl Into<String>) -> Result<Arc<Self>> {
        Self::new(manager_code).map(Arc::new)
    }

    /// missing and wrong codes are reported separately
    pub fn verify(&self, entered: Option<&str>) -> Result<()> {
        match entered {
            None => {
                warn!("credit limit change attempted without manager code");
                Err(BankError::ManagerCodeMissing)
            }
            Some(code) if self.manager_code.matches(code) => Ok(()),
            Some(_) => {
                warn!("credit limit change attempted with invalid manager code");
                Err(BankError::InvalidManagerCode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let pin = Secret::new("1234");
        assert_eq!(format!("{:?}", pin), "Secret(****)");
        assert!(pin.matches("1234"));
        assert!(!pin.matches("4321"));
    }

    #[test]
    fn test_authority_verification() {
        let authority = BranchAuthority::new("7777").unwrap();

        assert!(authority.verify(Some("7777")).is_ok());
        assert_eq!(authority.verify(Some("0000")), Err(BankError::InvalidManagerCode));
        assert_eq!(authority.verify(None), Err(BankError::ManagerCodeMissing));
    }

    #[test]
    fn test_blank_manager_code_rejected() {
        let result = BranchAuthority::new("  ");
        assert!(matches!(result, Err(BankError::MissingField { field: "manager code" })));
    }
}
