//! # discovery-announce
//!
//! Validation and JSON wire contract for service-discovery announcements.
//!
//! This crate defines the payload a node sends to a discovery registry to
//! describe which services it offers, on which pool/environment, and at
//! what location. It covers the announcement data model, a
//! violation-collecting validation pass, and the canonical JSON codec —
//! producers and the registry depend on agreeing bit-for-bit on what a
//! valid announcement is and how it serializes.
//!
//! Registry storage, replication, lease expiry, and HTTP transport live in
//! the registry service, not here.
//!
//! ## Architecture
//!
//! ```text
//! Producer / Registry transport boundary
//!     │
//!     ├── codec (decode / encode JSON)
//!     │
//!     ├── DynamicAnnouncement (domain/)
//!     │       └── ServiceAnnouncement (domain/)
//!     │               └── ServiceId (domain/)
//!     │
//!     └── validation (Violation accumulation)
//! ```
//!
//! All types are immutable value objects; validation and the codec are
//! pure functions, safe to call concurrently without coordination.

pub mod codec;
pub mod domain;
pub mod error;
pub mod validation;
