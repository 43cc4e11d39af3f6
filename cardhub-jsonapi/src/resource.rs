//! Resource objects and the `(type, id)` references between them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The resource types the hub serializes.
///
/// Serialized as the kebab-case JSON:API `type` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    /// Unprocessed card source records.
    RawCards,
    /// Compiled card metadata.
    CompiledMetas,
    /// Field descriptors on compiled metadata.
    Fields,
}

impl ResourceType {
    /// Returns the wire string for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RawCards => "raw-cards",
            Self::CompiledMetas => "compiled-metas",
            Self::Fields => "fields",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{ "type": ..., "id": ... }` resource reference.
///
/// References are how relationships point at resources; a reference in a
/// document always resolves to the primary resource or to exactly one entry
/// of `included`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: String,
}

impl ResourceId {
    /// Creates a reference to the resource with the given type and id.
    #[must_use]
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// The `data` of a relationship: one reference or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceId),
    Many(Vec<ResourceId>),
}

/// A relationship object wiring a resource to others by reference only;
/// related resources are never embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub data: RelationshipData,
}

impl Relationship {
    /// A to-one relationship.
    #[must_use]
    pub fn one(reference: ResourceId) -> Self {
        Self {
            data: RelationshipData::One(reference),
        }
    }

    /// A to-many relationship; order is preserved on the wire.
    #[must_use]
    pub fn many(references: Vec<ResourceId>) -> Self {
        Self {
            data: RelationshipData::Many(references),
        }
    }
}

/// Named relationships of a resource, with deterministic key order.
pub type Relationships = BTreeMap<String, Relationship>;

/// A JSON:API resource object.
///
/// `attributes` is an arbitrary JSON object produced by projection; the
/// `relationships` key is omitted from the wire entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

impl Resource {
    /// Creates a resource stub with empty attributes and no relationships.
    #[must_use]
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes: Map::new(),
            relationships: None,
        }
    }

    /// The `(type, id)` reference identifying this resource.
    #[must_use]
    pub fn identity(&self) -> ResourceId {
        ResourceId::new(self.kind, self.id.clone())
    }

    /// Inserts a named relationship, creating the relationships block on
    /// first use.
    pub fn add_relationship(&mut self, name: impl Into<String>, relationship: Relationship) {
        self.relationships
            .get_or_insert_with(Relationships::new)
            .insert(name.into(), relationship);
    }
}
