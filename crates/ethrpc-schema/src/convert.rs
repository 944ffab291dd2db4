//! Structuring and unstructuring
//!
//! [`Structure`] turns a JSON value into a typed value, [`Unstructure`] goes
//! the other way. Leaves delegate to the primitive codecs, containers and
//! records recurse, and every error picks up the field name or array index
//! it passed through on the way out.

use bytes::Bytes;
use ethrpc_primitives::{
    hex_data, quantity, Address, Amount, BlockHash, BlockNonce, LogTopic, LogsBloom, TrieHash,
    TxHash, UnclesHash, U256,
};
use serde_json::{Map, Value};

use crate::error::{Alternative, Reason, ValidationError};
use crate::schema::{Standard, Substitute};
use crate::CodecOptions;

/// Convert a JSON value into `Self`
///
/// `S` is the schema of the codec doing the conversion; it decides which
/// concrete types substitutable fields of records decode into. Leaves accept
/// any schema.
pub trait Structure<S = Standard>: Sized {
    /// Validate and convert
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError>;
}

/// Convert `self` into its canonical JSON value
pub trait Unstructure {
    /// Convert; typed values are valid by construction, so this cannot fail
    fn unstructure(&self, options: &CodecOptions) -> Value;
}

// ===== Leaves =====

pub(crate) fn expect_str(value: &Value) -> Result<&str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::unexpected_type("string", value))
}

impl<S> Structure<S> for Address {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        let s = expect_str(value)?;
        if options.validate_checksums {
            Ok(ethrpc_crypto::verify_checksum(s)?)
        } else {
            Ok(Address::from_hex(s)?)
        }
    }
}

impl Unstructure for Address {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        if options.checksum_addresses {
            Value::String(ethrpc_crypto::to_checksum(self))
        } else {
            Value::String(self.to_hex())
        }
    }
}

impl<S> Structure<S> for Amount {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Ok(Amount::from_hex(expect_str(value)?)?)
    }
}

impl Unstructure for Amount {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(self.to_hex())
    }
}

macro_rules! fixed_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S> Structure<S> for $ty {
                fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
                    Ok(<$ty>::from_hex(expect_str(value)?)?)
                }
            }

            impl Unstructure for $ty {
                fn unstructure(&self, _options: &CodecOptions) -> Value {
                    Value::String(self.to_hex())
                }
            }
        )*
    };
}

fixed_leaf!(TxHash, BlockHash, TrieHash, UnclesHash, LogTopic, BlockNonce, LogsBloom);

impl<S> Structure<S> for u64 {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Ok(quantity::parse_u64(expect_str(value)?)?)
    }
}

impl Unstructure for u64 {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(quantity::format_u64(*self))
    }
}

impl<S> Structure<S> for U256 {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Ok(quantity::parse_u256(expect_str(value)?)?)
    }
}

impl Unstructure for U256 {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(quantity::format_u256(self))
    }
}

impl<S> Structure<S> for Bytes {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Ok(Bytes::from(hex_data::decode(expect_str(value)?)?))
    }
}

impl Unstructure for Bytes {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(hex_data::encode(self))
    }
}

impl<S> Structure<S> for bool {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        value
            .as_bool()
            .ok_or_else(|| ValidationError::unexpected_type("boolean", value))
    }
}

impl Unstructure for bool {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::Bool(*self)
    }
}

impl<S> Structure<S> for String {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        expect_str(value).map(str::to_string)
    }
}

impl Unstructure for String {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(self.clone())
    }
}

impl Unstructure for str {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(self.to_string())
    }
}

// ===== Containers =====

/// `null` is `None`; anything else must structure as `T`
impl<S, T: Structure<S>> Structure<S> for Option<T> {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Null => Ok(None),
            other => T::structure(options, other).map(Some),
        }
    }
}

impl<T: Unstructure> Unstructure for Option<T> {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        match self {
            Some(inner) => inner.unstructure(options),
            None => Value::Null,
        }
    }
}

impl<S, T: Structure<S>> Structure<S> for Vec<T> {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::unexpected_type("array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::structure(options, item).map_err(|e| e.at_index(i)))
            .collect()
    }
}

impl<T: Unstructure> Unstructure for Vec<T> {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        Value::Array(self.iter().map(|item| item.unstructure(options)).collect())
    }
}

impl<T: Unstructure + ?Sized> Unstructure for &T {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        (**self).unstructure(options)
    }
}

impl Unstructure for Value {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        self.clone()
    }
}

// ===== Unions =====

/// Try union alternatives in order, keeping the first success
pub(crate) struct Alternatives<'v, T> {
    value: &'v Value,
    matched: Option<T>,
    failures: Vec<Alternative>,
}

impl<'v, T> Alternatives<'v, T> {
    pub(crate) fn new(value: &'v Value) -> Self {
        Self {
            value,
            matched: None,
            failures: Vec::new(),
        }
    }

    pub(crate) fn or_try<F>(mut self, name: &'static str, attempt: F) -> Self
    where
        F: FnOnce(&'v Value) -> Result<T, ValidationError>,
    {
        if self.matched.is_none() {
            match attempt(self.value) {
                Ok(v) => self.matched = Some(v),
                Err(error) => self.failures.push(Alternative { name, error }),
            }
        }
        self
    }

    /// First success, or the failure
    ///
    /// When exactly one alternative failed on content rather than on JSON
    /// kind, its error is returned as is so the path points at the bad
    /// value. Otherwise every failure is reported together.
    pub(crate) fn finish(mut self) -> Result<T, ValidationError> {
        if let Some(v) = self.matched {
            return Ok(v);
        }
        let mut fitting = self
            .failures
            .iter()
            .enumerate()
            .filter(|(_, f)| !is_kind_mismatch(f.error.reason()))
            .map(|(i, _)| i);
        if let (Some(i), None) = (fitting.next(), fitting.next()) {
            return Err(self.failures.swap_remove(i).error);
        }
        Err(ValidationError::new(Reason::NoMatchingAlternative(
            self.failures,
        )))
    }
}

fn is_kind_mismatch(reason: &Reason) -> bool {
    match reason {
        Reason::UnexpectedType { .. } => true,
        Reason::NoMatchingAlternative(failures) => {
            failures.iter().all(|f| is_kind_mismatch(f.error.reason()))
        }
        _ => false,
    }
}

// ===== Records =====

pub(crate) fn expect_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::unexpected_type("object", value))
}

/// Field that must be present
pub(crate) fn required<S, T: Structure<S>>(
    options: &CodecOptions,
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<T, ValidationError> {
    match object.get(key) {
        Some(value) => T::structure(options, value).map_err(|e| e.at_field(key)),
        None => Err(ValidationError::new(Reason::MissingField).at_field(key)),
    }
}

/// Field that may be absent or `null`
pub(crate) fn optional<S, T: Structure<S>>(
    options: &CodecOptions,
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, ValidationError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::structure(options, value)
            .map(Some)
            .map_err(|e| e.at_field(key)),
    }
}

/// Same decoding as [`optional`]; the difference is on the encoding side
pub(crate) fn nullable<S, T: Structure<S>>(
    options: &CodecOptions,
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, ValidationError> {
    optional::<S, T>(options, object, key)
}

/// Field with a default value filled in when absent
pub(crate) fn defaulted<S, T: Structure<S> + Default>(
    options: &CodecOptions,
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<T, ValidationError> {
    optional::<S, T>(options, object, key).map(Option::unwrap_or_default)
}

pub(crate) fn defaulted_amount<S, T: Structure<S> + Substitute<Amount>>(
    options: &CodecOptions,
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<T, ValidationError> {
    optional::<S, T>(options, object, key).map(|v| v.unwrap_or_else(|| T::from_base(Amount::ZERO)))
}

pub(crate) fn put<T: Unstructure + ?Sized>(
    object: &mut Map<String, Value>,
    options: &CodecOptions,
    key: &'static str,
    value: &T,
) {
    object.insert(key.to_string(), value.unstructure(options));
}

pub(crate) fn put_optional<T: Unstructure>(
    object: &mut Map<String, Value>,
    options: &CodecOptions,
    key: &'static str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        put(object, options, key, value);
    }
}

/// Implement [`Structure`] and [`Unstructure`] for a record generic over `S: Schema`
///
/// Field modes:
/// - `required`: must be present
/// - `optional`: absent or `null` decodes to `None`; `None` is omitted
/// - `nullable`: absent or `null` decodes to `None`; `None` is written as `null`
/// - `defaulted`: absent or `null` decodes to `Default::default()`; always written
/// - `defaulted_amount`: like `defaulted`, with a zero amount as the default
macro_rules! impl_record {
    ($name:ident { $($field:ident : $mode:ident $key:literal),* $(,)? }) => {
        impl<S: $crate::Schema> $crate::Structure<S> for $name<S> {
            fn structure(
                options: &$crate::CodecOptions,
                value: &::serde_json::Value,
            ) -> Result<Self, $crate::ValidationError> {
                let object = $crate::convert::expect_object(value)?;
                Ok($name {
                    $($field: $crate::convert::$mode::<S, _>(options, object, $key)?,)*
                })
            }
        }

        impl<S: $crate::Schema> $crate::Unstructure for $name<S> {
            fn unstructure(&self, options: &$crate::CodecOptions) -> ::serde_json::Value {
                let mut object = ::serde_json::Map::new();
                $($crate::convert::impl_record!(@put $mode, object, options, $key, &self.$field);)*
                ::serde_json::Value::Object(object)
            }
        }
    };
    (@put optional, $object:ident, $options:ident, $key:literal, $value:expr) => {
        $crate::convert::put_optional(&mut $object, $options, $key, $value)
    };
    (@put $mode:ident, $object:ident, $options:ident, $key:literal, $value:expr) => {
        $crate::convert::put(&mut $object, $options, $key, $value)
    };
}

pub(crate) use impl_record;
