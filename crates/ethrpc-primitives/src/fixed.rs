//! Fixed-width byte strings

use std::fmt;
use std::str::FromStr;

use crate::hex_data;
use crate::PrimitiveError;

/// Immutable buffer of exactly `N` bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>([u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Size in bytes
    pub const LEN: usize = N;

    /// All-zero value
    pub const ZERO: Self = FixedBytes([0u8; N]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        FixedBytes(bytes)
    }

    /// Create from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
        if slice.len() != N {
            return Err(PrimitiveError::InvalidLength {
                expected: N,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(FixedBytes(bytes))
    }

    /// Parse from a `0x`-prefixed hex string of exactly `2 * N` digits
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        hex_data::decode_fixed(s).map(FixedBytes)
    }

    /// Get as bytes
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Convert to lower-case prefixed hex
    pub fn to_hex(&self) -> String {
        hex_data::encode(&self.0)
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        FixedBytes(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> FromStr for FixedBytes<N> {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Declare a nominal wrapper over [`FixedBytes`] with the usual accessors
macro_rules! fixed_bytes_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name($crate::FixedBytes<$len>);

        impl $name {
            /// Size in bytes
            pub const LEN: usize = $len;

            /// All-zero value
            pub const ZERO: Self = $name($crate::FixedBytes::ZERO);

            /// Create from bytes
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                $name($crate::FixedBytes::from_bytes(bytes))
            }

            /// Create from slice
            pub fn from_slice(slice: &[u8]) -> Result<Self, $crate::PrimitiveError> {
                $crate::FixedBytes::from_slice(slice).map($name)
            }

            /// Parse from a `0x`-prefixed hex string of the exact width
            pub fn from_hex(s: &str) -> Result<Self, $crate::PrimitiveError> {
                $crate::FixedBytes::from_hex(s).map($name)
            }

            /// Get as bytes
            pub const fn as_bytes(&self) -> &[u8; $len] {
                self.0.as_bytes()
            }

            /// Check if zero
            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Convert to lower-case prefixed hex
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self::from_bytes(bytes)
            }
        }

        impl From<$crate::FixedBytes<$len>> for $name {
            fn from(bytes: $crate::FixedBytes<$len>) -> Self {
                $name(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::PrimitiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }
    };
}

pub(crate) use fixed_bytes_type;
