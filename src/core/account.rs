//! Numeric account identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 64-bit numeric account id of a miner
///
/// The kernel performs no validation on account ids; any value is a valid
/// plot seed component.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl AccountId {
    /// Create a new AccountId
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for u64 {
    fn from(account: AccountId) -> Self {
        account.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = AccountId::new(10282355196851764065);
        assert_eq!(account.value(), 10282355196851764065);
    }

    #[test]
    fn test_account_display() {
        let account = AccountId::new(42);
        assert_eq!(account.to_string(), "42");
    }

    #[test]
    fn test_account_conversions() {
        let account: AccountId = 999u64.into();
        assert_eq!(u64::from(account), 999);
    }
}
