//! Strongly-typed document identifiers.
//!
//! The document store keys every record by an opaque string. The newtypes
//! below keep item, transaction, alert and user ids from being mixed up, and
//! guarantee the wrapped string is non-blank.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a stock transaction document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

/// Identifier of an explicit alert document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

/// Identifier of an authenticated user (the identity provider's uid).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_document_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw document id, rejecting blank strings.
            pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
                let raw = raw.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": blank id")));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Generate a fresh id.
            ///
            /// Uses UUIDv7 (time-ordered), rendered without hyphens the way
            /// auto-generated document keys usually look.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_document_id!(ItemId, "ItemId");
impl_document_id!(TransactionId, "TransactionId");
impl_document_id!(AlertId, "AlertId");
impl_document_id!(UserId, "UserId");

/// Alerts derived from low-stock items are keyed by the item they describe.
impl From<&ItemId> for AlertId {
    fn from(value: &ItemId) -> Self {
        Self(value.0.clone())
    }
}
