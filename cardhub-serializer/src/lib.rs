//! Resource graph serializer for the card hub.
//!
//! Turns a [`RawCard`](cardhub_model::RawCard), optionally paired with its
//! compiled metadata graph, into a single JSON:API document: one primary
//! `raw-cards` resource plus a flattened, deduplicated `included` array
//! covering every transitively reachable `compiled-metas` and `fields`
//! resource.
//!
//! The pieces:
//! - [`AttrPath`] — dotted attribute paths with read/write semantics over
//!   JSON trees
//! - [`AttrSpec`] / [`project`] — projection of a domain payload into a
//!   resource stub
//! - [`DocumentBuilder`] / [`VisitStack`] — the explicit working state of
//!   one serialization call
//! - [`RawCardSerializer`] — the entry point
//!
//! The traversal is synchronous, allocates all state per call, and raises no
//! errors: missing attributes degrade to `null`, and cyclic field graphs are
//! cut by the visit stack rather than reported.

mod document;
mod path;
mod projector;
mod serializer;

pub use document::{DocumentBuilder, VisitStack};
pub use path::{AttrPath, Segment};
pub use projector::{AttrSpec, project};
pub use serializer::RawCardSerializer;
