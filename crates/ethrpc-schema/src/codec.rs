//! Codec configuration and entry points

use std::any::type_name;
use std::marker::PhantomData;

use ethrpc_primitives::{Address, Amount};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Primitives, Schema, Standard, Substitute};
use crate::{Structure, Unstructure, ValidationError};

/// Options shared by every conversion a codec performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Emit addresses in EIP-55 checksum casing (otherwise lower-case)
    #[serde(default = "default_checksum_addresses")]
    pub checksum_addresses: bool,
    /// Reject mixed-case addresses whose casing is not a valid checksum
    #[serde(default)]
    pub validate_checksums: bool,
}

fn default_checksum_addresses() -> bool {
    true
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            checksum_addresses: default_checksum_addresses(),
            validate_checksums: false,
        }
    }
}

/// Converter between JSON values and typed values of schema `S`
///
/// A codec is immutable once built and can be shared freely. Codecs with
/// different substitutions are different types and never see each other's
/// registrations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Codec<S: Schema = Standard> {
    options: CodecOptions,
    schema: S,
}

impl Codec<Standard> {
    /// Codec with no substitutions and default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a codec
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }
}

impl<S: Schema> Codec<S> {
    /// Codec with the given options
    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            options,
            schema: S::default(),
        }
    }

    /// Options in effect
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Validate `value` and convert it into `T`
    pub fn structure<T: Structure<S>>(&self, value: &Value) -> Result<T, ValidationError> {
        T::structure(&self.options, value).map_err(|e| {
            tracing::trace!(
                target: "ethrpc_schema",
                ty = type_name::<T>(),
                path = %e.path_string(),
                "structure failed: {}",
                e
            );
            e
        })
    }

    /// Convert `value` into its canonical JSON form
    pub fn unstructure<T: Unstructure + ?Sized>(&self, value: &T) -> Value {
        value.unstructure(&self.options)
    }
}

/// Builder for [`Codec`]
///
/// Substitutions are recorded in the builder's type; `build` checks at
/// compile time that each substitute is usable.
#[derive(Debug, Clone, Copy)]
pub struct CodecBuilder<A = Address, M = Amount> {
    options: CodecOptions,
    _types: PhantomData<fn() -> (A, M)>,
}

impl CodecBuilder {
    /// Builder with no substitutions and default options
    pub fn new() -> Self {
        CodecBuilder {
            options: CodecOptions::default(),
            _types: PhantomData,
        }
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, M> CodecBuilder<A, M> {
    /// Decode address fields into `A2`
    pub fn address<A2: Substitute<Address>>(self) -> CodecBuilder<A2, M> {
        CodecBuilder {
            options: self.options,
            _types: PhantomData,
        }
    }

    /// Decode amount fields into `M2`
    pub fn amount<M2: Substitute<Amount>>(self) -> CodecBuilder<A, M2> {
        CodecBuilder {
            options: self.options,
            _types: PhantomData,
        }
    }

    /// Replace all options at once
    pub fn options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Set [`CodecOptions::checksum_addresses`]
    pub fn checksum_addresses(mut self, enabled: bool) -> Self {
        self.options.checksum_addresses = enabled;
        self
    }

    /// Set [`CodecOptions::validate_checksums`]
    pub fn validate_checksums(mut self, enabled: bool) -> Self {
        self.options.validate_checksums = enabled;
        self
    }

    /// Finish the codec
    pub fn build(self) -> Codec<Primitives<A, M>>
    where
        Primitives<A, M>: Schema,
    {
        tracing::debug!(
            target: "ethrpc_schema",
            address = type_name::<A>(),
            amount = type_name::<M>(),
            checksum_addresses = self.options.checksum_addresses,
            validate_checksums = self.options.validate_checksums,
            "codec built"
        );
        Codec::with_options(self.options)
    }
}

/// Structure `value` with the standard schema and default options
pub fn structure<T: Structure>(value: &Value) -> Result<T, ValidationError> {
    Codec::new().structure(value)
}

/// Unstructure `value` with default options
pub fn unstructure<T: Unstructure + ?Sized>(value: &T) -> Value {
    Codec::new().unstructure(value)
}
