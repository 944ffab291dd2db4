//! Primitive substitution
//!
//! A consumer can replace [`Address`] or [`Amount`] with its own type (for
//! example an address that also carries a display label). The replacement is
//! chosen per codec through [`CodecBuilder`](crate::CodecBuilder) and encoded
//! at the type level as a [`Schema`]; every record is generic over its
//! schema, so `TxReceipt<Primitives<MyAddress>>` holds `MyAddress` wherever
//! the wire carries an address.
//!
//! Decoding builds the base value with the base codec and then converts it
//! with [`Substitute::from_base`]. Encoding goes through
//! [`Substitute::as_base`], so the wire output only ever depends on the base
//! payload.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use ethrpc_primitives::{Address, Amount};

use crate::{Structure, Unstructure};

/// A type that can stand in for the primitive `B`
///
/// `from_base` receives an already validated base value; any extra state the
/// substitute carries starts out at its default.
pub trait Substitute<B>: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Wrap a validated base value
    fn from_base(base: B) -> Self;

    /// Base payload used for encoding and comparison on the wire
    fn as_base(&self) -> &B;
}

impl Substitute<Address> for Address {
    fn from_base(base: Address) -> Self {
        base
    }

    fn as_base(&self) -> &Address {
        self
    }
}

impl Substitute<Amount> for Amount {
    fn from_base(base: Amount) -> Self {
        base
    }

    fn as_base(&self) -> &Amount {
        self
    }
}

/// The set of concrete types a codec decodes substitutable primitives into
pub trait Schema: Clone + Copy + fmt::Debug + PartialEq + Default + Send + Sync + 'static {
    /// Type produced for address fields
    type Address: Substitute<Address> + Structure<Self> + Unstructure;

    /// Type produced for amount fields
    type Amount: Substitute<Amount> + Structure<Self> + Unstructure;
}

/// Schema built from an address type `A` and an amount type `M`
pub struct Primitives<A = Address, M = Amount>(PhantomData<fn() -> (A, M)>);

/// Schema with no substitutions
pub type Standard = Primitives<Address, Amount>;

impl<A, M> Schema for Primitives<A, M>
where
    A: Substitute<Address> + Structure<Self> + Unstructure,
    M: Substitute<Amount> + Structure<Self> + Unstructure,
{
    type Address = A;
    type Amount = M;
}

impl<A, M> Clone for Primitives<A, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, M> Copy for Primitives<A, M> {}

impl<A, M> Default for Primitives<A, M> {
    fn default() -> Self {
        Primitives(PhantomData)
    }
}

impl<A, M> PartialEq for Primitives<A, M> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A, M> Eq for Primitives<A, M> {}

impl<A, M> fmt::Debug for Primitives<A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitives")
            .field("address", &type_name::<A>())
            .field("amount", &type_name::<M>())
            .finish()
    }
}

/// Implement [`Structure`] and [`Unstructure`] for a substitute type
///
/// The type must implement [`Substitute`] for the given base.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Labeled { address: Address, label: Option<String> }
///
/// impl Substitute<Address> for Labeled {
///     fn from_base(address: Address) -> Self { Labeled { address, label: None } }
///     fn as_base(&self) -> &Address { &self.address }
/// }
///
/// ethrpc_schema::substitute!(Labeled => Address);
/// ```
#[macro_export]
macro_rules! substitute {
    ($ty:ty => $base:ty) => {
        impl<S> $crate::Structure<S> for $ty {
            fn structure(
                options: &$crate::CodecOptions,
                value: &$crate::Value,
            ) -> Result<Self, $crate::ValidationError> {
                let base = <$base as $crate::Structure<S>>::structure(options, value)?;
                Ok(<$ty as $crate::Substitute<$base>>::from_base(base))
            }
        }

        impl $crate::Unstructure for $ty {
            fn unstructure(&self, options: &$crate::CodecOptions) -> $crate::Value {
                $crate::Unstructure::unstructure(
                    <$ty as $crate::Substitute<$base>>::as_base(self),
                    options,
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        amount: Amount,
        tag: u8,
    }

    impl Substitute<Amount> for Tagged {
        fn from_base(amount: Amount) -> Self {
            Tagged { amount, tag: 0 }
        }

        fn as_base(&self) -> &Amount {
            &self.amount
        }
    }

    crate::substitute!(Tagged => Amount);

    fn assert_schema<S: Schema>() {}

    #[test]
    fn test_standard_is_schema() {
        assert_schema::<Standard>();
    }

    #[test]
    fn test_substituted_is_schema() {
        assert_schema::<Primitives<Address, Tagged>>();
    }

    #[test]
    fn test_identity_substitute() {
        let address = Address::from_bytes([7; 20]);
        assert_eq!(Address::from_base(address), address);
        assert_eq!(address.as_base(), &address);
    }

    #[test]
    fn test_from_base_defaults_extras() {
        let tagged = Tagged::from_base(Amount::gwei(1));
        assert_eq!(tagged.tag, 0);
        assert_eq!(tagged.as_base(), &Amount::gwei(1));
    }

    #[test]
    fn test_debug_names_types() {
        let debug = format!("{:?}", Primitives::<Address, Tagged>::default());
        assert!(debug.contains("Tagged"));
    }
}
