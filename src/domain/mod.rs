//! Domain layer: the announcement envelope and its value types.
//!
//! This module contains the announcement data model: the service
//! identifier, the per-service announcement entry, and the dynamic
//! announcement envelope that is validated as a unit and carried over
//! the wire.

pub mod announcement;
pub mod service_announcement;
pub mod service_id;

pub use announcement::DynamicAnnouncement;
pub use service_announcement::ServiceAnnouncement;
pub use service_id::ServiceId;
