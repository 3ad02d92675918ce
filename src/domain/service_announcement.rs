//! Per-service announcement entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ServiceId;
use crate::validation::Violation;

/// One advertised service instance within an announcement envelope.
///
/// Pure value object: immutable once constructed, compared by full value
/// (id, type, and properties). The envelope owns its entries exclusively.
///
/// Construction never fails; a missing `id` is reported by
/// [`validate`](Self::validate) instead. `type` and `properties` carry no
/// constraint — a missing service type is currently legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceAnnouncement {
    /// Unique identifier of this service instance.
    #[serde(default)]
    id: Option<ServiceId>,

    /// Free-form service-kind tag (e.g. `"smtp"`, `"user-db"`).
    #[serde(rename = "type", default)]
    service_type: Option<String>,

    /// Arbitrary key/value metadata, e.g. connection endpoints. An absent
    /// wire key decodes as an empty mapping.
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

impl ServiceAnnouncement {
    /// Creates a new entry. No validation happens here.
    #[must_use]
    pub fn new(
        id: Option<ServiceId>,
        service_type: Option<String>,
        properties: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id,
            service_type,
            properties,
        }
    }

    /// Returns the service identifier, if present.
    #[must_use]
    pub fn id(&self) -> Option<ServiceId> {
        self.id
    }

    /// Returns the service-kind tag, if present.
    #[must_use]
    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }

    /// Returns the key/value metadata.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Checks this entry's constraints, collecting every violation found.
    ///
    /// Only `id` is required. Field paths are relative to the entry; the
    /// envelope re-roots them under its collection field when cascading.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.id.is_none() {
            violations.push(Violation::not_null("id"));
        }
        violations
    }
}
