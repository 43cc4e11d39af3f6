//! Compiled card metadata and its field graph.

use serde_json::{Map, Value};
use std::sync::{Arc, Weak};

/// Resolved metadata for a card.
///
/// Identified by `url`. Cards inherit through `adopts_from` (a chain that is
/// acyclic in well-formed metadata but is traversed defensively) and declare
/// an ordered list of fields. Nodes are shared via `Arc` because several
/// fields across a document can name the same value type.
#[derive(Debug, Clone)]
pub struct CompiledCard {
    /// Globally unique card URL.
    pub url: String,
    /// Module implementing the card's schema.
    pub schema_module: String,
    /// Module implementing custom serialization, when the card has one.
    pub serializer_module: Option<String>,
    /// URLs of cards this card's compile depended on.
    pub deps: Vec<String>,
    /// Per-feature component build info, keyed by feature name.
    pub component_infos: Map<String, Value>,
    /// Parent card this card adopts from.
    pub adopts_from: Option<Arc<CompiledCard>>,
    /// Declared fields, in declaration order.
    pub fields: Vec<Field>,
}

impl CompiledCard {
    /// Creates a leaf card with the given url and schema module, no parent
    /// and no fields.
    #[must_use]
    pub fn new(url: impl Into<String>, schema_module: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            schema_module: schema_module.into(),
            serializer_module: None,
            deps: Vec::new(),
            component_infos: Map::new(),
            adopts_from: None,
            fields: Vec::new(),
        }
    }
}

/// A named, typed slot on a compiled card.
///
/// Identified by the owning card's url plus the field name. The value type
/// is itself a compiled card, reached through [`CardRef`].
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    /// Whether the field's value is computed rather than stored.
    pub computed: bool,
    /// The containment kind (e.g. `contains`, `containsMany`); serialized
    /// under the attribute alias `type`.
    pub field_type: String,
    /// The compiled card describing the field's value type.
    pub card: CardRef,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, card: CardRef) -> Self {
        Self {
            name: name.into(),
            computed: false,
            field_type: field_type.into(),
            card,
        }
    }
}

/// Edge from a field to the compiled card describing its value type.
///
/// A value type may be an ancestor of the declaring card, or the declaring
/// card itself, which makes the field graph cyclic. Safe Rust cannot form a
/// strong `Arc` cycle, so such back edges hold a `Weak` pointer instead,
/// typically produced inside `Arc::new_cyclic` while the target card is
/// under construction. [`CardRef::upgrade`] resolves either variant.
#[derive(Debug, Clone)]
pub enum CardRef {
    /// Forward edge to an already-built card.
    Card(Arc<CompiledCard>),
    /// Back edge onto a card higher up the graph.
    Cycle(Weak<CompiledCard>),
}

impl CardRef {
    /// Forward edge to `card`.
    #[must_use]
    pub fn card(card: Arc<CompiledCard>) -> Self {
        Self::Card(card)
    }

    /// Back edge onto a card still under construction.
    #[must_use]
    pub fn cycle(card: Weak<CompiledCard>) -> Self {
        Self::Cycle(card)
    }

    /// Resolves the edge to its card.
    ///
    /// Returns `None` only for a back edge whose target has been dropped,
    /// which cannot happen while the graph's root is alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Arc<CompiledCard>> {
        match self {
            Self::Card(card) => Some(Arc::clone(card)),
            Self::Cycle(weak) => weak.upgrade(),
        }
    }
}

impl From<Arc<CompiledCard>> for CardRef {
    fn from(card: Arc<CompiledCard>) -> Self {
        Self::Card(card)
    }
}
