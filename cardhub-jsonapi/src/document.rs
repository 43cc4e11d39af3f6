//! Top-level documents: a primary resource plus the `included` side-table.

use crate::resource::{Resource, ResourceId};
use serde::{Deserialize, Serialize};

/// A JSON:API document.
///
/// `included` holds every secondary resource reachable from the primary
/// resource's relationships, flattened and deduplicated by `(type, id)`.
/// When the document carries no secondary resources the key is absent from
/// the wire, not `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: Resource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Resource>>,
}

impl Document {
    /// Wraps a primary resource with no included side-table.
    #[must_use]
    pub fn new(data: Resource) -> Self {
        Self {
            data,
            included: None,
        }
    }

    /// Finds the included resource a reference resolves to, if any.
    pub fn find_included(&self, reference: &ResourceId) -> Option<&Resource> {
        self.included
            .as_deref()?
            .iter()
            .find(|resource| resource.kind == reference.kind && resource.id == reference.id)
    }

    /// Finds the resource a reference resolves to, checking the primary
    /// resource before the included side-table.
    pub fn resolve(&self, reference: &ResourceId) -> Option<&Resource> {
        if self.data.kind == reference.kind && self.data.id == reference.id {
            return Some(&self.data);
        }
        self.find_included(reference)
    }
}
