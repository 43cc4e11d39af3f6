//! Explicit working state for one serialization call.
//!
//! Both pieces are plain values threaded through the traversal; no state
//! hides in the serializer, and nothing outlives a call.

use cardhub_jsonapi::{Resource, ResourceId};
use std::collections::HashSet;

/// The `included` array under construction, paired with a `(type, id)`
/// index over it.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    included: Vec<Resource>,
    index: HashSet<ResourceId>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a resource with this identity has been included.
    #[must_use]
    pub fn contains(&self, reference: &ResourceId) -> bool {
        self.index.contains(reference)
    }

    /// The included resource with this identity, if any.
    pub fn find(&self, reference: &ResourceId) -> Option<&Resource> {
        if !self.index.contains(reference) {
            return None;
        }
        self.included
            .iter()
            .find(|resource| resource.kind == reference.kind && resource.id == reference.id)
    }

    /// Appends a resource.
    ///
    /// Callers check [`contains`](Self::contains) first; appending a
    /// duplicate identity would break the document's uniqueness invariant.
    pub fn push(&mut self, resource: Resource) {
        let identity = resource.identity();
        debug_assert!(!self.index.contains(&identity), "duplicate {}", identity);
        self.index.insert(identity);
        self.included.push(resource);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.included.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    /// The finished `included` array, in append order.
    #[must_use]
    pub fn into_included(self) -> Vec<Resource> {
        self.included
    }
}

/// Ordered set of the identities being built on the current recursive path.
///
/// This is the traversal's sole termination mechanism on cyclic graphs:
/// an edge that leads back to an identity still on the stack is not
/// descended into. Membership checks are O(1); push/pop follow the
/// recursion exactly.
#[derive(Debug, Default)]
pub struct VisitStack {
    order: Vec<ResourceId>,
    members: HashSet<ResourceId>,
}

impl VisitStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this identity is on the current path.
    #[must_use]
    pub fn contains(&self, reference: &ResourceId) -> bool {
        self.members.contains(reference)
    }

    /// Pushes an identity onto the path. Identities on the stack are unique.
    pub fn push(&mut self, reference: ResourceId) {
        debug_assert!(!self.members.contains(&reference), "re-entered {}", reference);
        self.members.insert(reference.clone());
        self.order.push(reference);
    }

    /// Pops the most recently pushed identity.
    pub fn pop(&mut self) {
        if let Some(reference) = self.order.pop() {
            self.members.remove(&reference);
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
