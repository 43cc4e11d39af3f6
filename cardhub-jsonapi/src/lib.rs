//! JSON:API document model for the card hub.
//!
//! Defines the typed wire shapes the serializer emits and route handlers
//! return verbatim as `application/vnd.api+json` bodies:
//! - [`Resource`] / [`ResourceId`] / [`ResourceType`] — resource objects and
//!   the `(type, id)` references that link them
//! - [`Relationship`] — relationship objects holding one or many references
//! - [`Document`] — a primary resource plus the deduplicated `included`
//!   side-table
//! - [`ApiError`] — the hub's error taxonomy and its JSON:API error-object
//!   serialization
//!
//! Nothing in this crate builds documents; that is the serializer crate's
//! job. This crate only pins the shapes.

mod document;
mod error;
mod resource;

pub use document::Document;
pub use error::{ApiError, ErrorDocument, ErrorObject, ErrorSource, reason_phrase};
pub use resource::{Relationship, RelationshipData, Relationships, Resource, ResourceId, ResourceType};
