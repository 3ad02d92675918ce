//! Dynamic announcement envelope.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ServiceAnnouncement;
use crate::error::ValidationFailed;
use crate::validation::Violation;

/// Path prefix for violations cascaded out of the entry collection. All
/// element failures share the same prefix; the element index is not
/// distinguished.
const SERVICE_ANNOUNCEMENTS_PREFIX: &str = "serviceAnnouncements[].";

/// The announcement a node sends to the discovery registry: which services
/// it offers, on which pool/environment, and at what location.
///
/// Constructed once per announcement event (node startup, periodic
/// heartbeat) or reconstructed from received JSON; immutable thereafter.
/// Construction never fails — [`validate`](Self::validate) reports every
/// constraint violation in a separate pass, so the registry can inspect
/// (and render) an invalid envelope before rejecting it.
///
/// Equality covers all four fields, with the entry collection compared as
/// an unordered set (value duplicates collapse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicAnnouncement {
    /// Top-level namespace isolating unrelated deployments
    /// (e.g. `"production"`, `"testing"`). Required.
    #[serde(default)]
    environment: Option<String>,

    /// Named partition of nodes within the environment. Required.
    #[serde(default)]
    pool: Option<String>,

    /// Free-form placement hint (e.g. `"/dc1/rack4/host9"`). Optional,
    /// carries no constraint.
    #[serde(default)]
    location: Option<String>,

    /// The advertised service instances. Required, may be empty.
    #[serde(rename = "serviceAnnouncements", default)]
    service_announcements: Option<HashSet<ServiceAnnouncement>>,
}

impl DynamicAnnouncement {
    /// Creates a new envelope. No validation happens here.
    #[must_use]
    pub fn new(
        environment: Option<String>,
        pool: Option<String>,
        location: Option<String>,
        service_announcements: Option<HashSet<ServiceAnnouncement>>,
    ) -> Self {
        Self {
            environment,
            pool,
            location,
            service_announcements,
        }
    }

    /// Returns the environment, if present.
    #[must_use]
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// Returns the pool, if present.
    #[must_use]
    pub fn pool(&self) -> Option<&str> {
        self.pool.as_deref()
    }

    /// Returns the location, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the entry set, if present.
    #[must_use]
    pub fn service_announcements(&self) -> Option<&HashSet<ServiceAnnouncement>> {
        self.service_announcements.as_ref()
    }

    /// Checks every constraint on this envelope and collects *all*
    /// violations found, not just the first.
    ///
    /// `environment`, `pool`, and the entry collection are required;
    /// `location` is not. When the collection is present, validation
    /// cascades into each entry and re-roots its violations under
    /// `serviceAnnouncements[].`. An empty result means the announcement
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.environment.is_none() {
            violations.push(Violation::not_null("environment"));
        }
        if self.pool.is_none() {
            violations.push(Violation::not_null("pool"));
        }
        match &self.service_announcements {
            None => violations.push(Violation::not_null("serviceAnnouncements")),
            Some(entries) => {
                for entry in entries {
                    violations.extend(
                        entry
                            .validate()
                            .into_iter()
                            .map(|v| v.prefixed(SERVICE_ANNOUNCEMENTS_PREFIX)),
                    );
                }
            }
        }
        violations
    }

    /// Accept/reject form of [`validate`](Self::validate), for the
    /// registry's inbound path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailed`] carrying the full violation list when
    /// any constraint is broken.
    pub fn ensure_valid(&self) -> Result<(), ValidationFailed> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailed { violations })
        }
    }
}
