//! Strongly-typed identifiers used across the domain.
//!
//! Warehouses and locations are keyed by natural business identifiers (a
//! business unit code like `MWH.001`, a location code like `AMSTERDAM-001`),
//! not surrogate keys, so these are thin wrappers over strings.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique external identifier of a warehouse unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessUnitCode(String);

/// Identifier of a named location (site with capacity ceilings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier without validation.
            ///
            /// Use `FromStr` when the input comes from an untrusted boundary.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_code_newtype!(BusinessUnitCode, "BusinessUnitCode");
impl_code_newtype!(LocationId, "LocationId");
