//! Amounts of wei

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;

use crate::quantity;
use crate::PrimitiveError;

const GWEI_DECIMALS: usize = 9;
const ETHER_DECIMALS: usize = 18;

/// A non-negative amount of wei
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Amount(U256);

impl Amount {
    /// Zero wei
    pub const ZERO: Amount = Amount(U256([0; 4]));

    /// Amount from a number of wei
    pub fn wei(value: impl Into<U256>) -> Self {
        Amount(value.into())
    }

    /// Amount from a number of gwei (10^9 wei)
    pub fn gwei(value: u64) -> Self {
        Amount(U256::from(value) * U256::exp10(GWEI_DECIMALS))
    }

    /// Amount from a number of ether (10^18 wei)
    pub fn ether(value: u64) -> Self {
        Amount(U256::from(value) * U256::exp10(ETHER_DECIMALS))
    }

    /// Value in wei
    pub fn as_wei(&self) -> U256 {
        self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Sum, or `None` on overflow
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Difference, or `None` if `other` is larger
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Parse from a minimal `0x`-prefixed hex quantity
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        quantity::parse_u256(s).map(Amount)
    }

    /// Convert to a minimal hex quantity
    pub fn to_hex(&self) -> String {
        quantity::format_u256(&self.0)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({} wei)", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Amount(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount(U256::from(value))
    }
}

impl FromStr for Amount {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
