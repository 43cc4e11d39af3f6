//! Card domain model for the hub.
//!
//! Defines the plain domain objects the serializer consumes:
//! - [`RawCard`] — unprocessed card source (data, files, inheritance
//!   pointer, feature-module slots)
//! - [`CompiledCard`] — resolved card metadata (modules, deps, adopts-from
//!   chain, field graph)
//! - [`Field`] — a named, typed slot on a compiled card, itself typed by
//!   reference to another compiled card
//!
//! Compiled metadata forms a shared, possibly cyclic graph: a field's value
//! type can loop back onto a card that declares it. Nodes are `Arc`-shared
//! and back edges are held weakly (see [`CardRef`]).

mod compiled;
mod raw_card;

pub use compiled::{CardRef, CompiledCard, Field};
pub use raw_card::{FEATURE_NAMES, RawCard};
