//! Type-safe service identifier.
//!
//! [`ServiceId`] is a newtype wrapper around [`uuid::Uuid`] providing
//! type safety so that service identifiers cannot be confused with other
//! UUIDs. The canonical textual form is the dashed hexadecimal UUID
//! rendering, which is what appears in announcement JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdFormatError;

/// Opaque unique identifier for one advertised service instance.
///
/// Generated randomly by the producer when it first announces a service
/// and immutable thereafter. Used as the key for each entry within an
/// announcement envelope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ServiceId(uuid::Uuid);

impl ServiceId {
    /// Creates a new random `ServiceId` (UUID v4).
    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parses a `ServiceId` from its canonical dashed-hex textual form.
    ///
    /// # Errors
    ///
    /// Returns [`IdFormatError`] when `text` is not a well-formed token.
    pub fn parse(text: &str) -> Result<Self, IdFormatError> {
        Ok(Self(uuid::Uuid::parse_str(text)?))
    }

    /// Creates a `ServiceId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceId {
    type Err = IdFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<uuid::Uuid> for ServiceId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ServiceId> for uuid::Uuid {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}
