//! The raw-card serializer: one call, one document.

use crate::document::{DocumentBuilder, VisitStack};
use crate::projector::{AttrSpec, project};
use cardhub_jsonapi::{Document, Relationship, ResourceId, ResourceType};
use cardhub_model::{CompiledCard, FEATURE_NAMES, Field, RawCard};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Serializes raw cards, and optionally their compiled metadata graphs,
/// into JSON:API documents.
///
/// The serializer is stateless: every call allocates its own builder and
/// visit stack, so concurrent calls cannot interfere with each other.
#[derive(Debug, Default)]
pub struct RawCardSerializer;

impl RawCardSerializer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serializes `card` into a document.
    ///
    /// When `compiled` is given, the document gets an `included` side-table
    /// (initialized even when it would stay empty) and the primary resource
    /// is wired to the compiled metadata through
    /// `relationships.compiledMeta`. Without it the document is the primary
    /// resource alone, with no `included` and no `relationships`.
    #[must_use]
    pub fn serialize(&self, card: &RawCard, compiled: Option<&Arc<CompiledCard>>) -> Document {
        debug!(
            "serializing raw card {} (compiled: {})",
            card.global_id(),
            compiled.is_some()
        );

        let source = serde_json::to_value(card).unwrap_or(Value::Null);
        let mut primary = project(
            ResourceType::RawCards,
            card.global_id(),
            &source,
            Some(&raw_card_attrs()),
        );

        let Some(compiled) = compiled else {
            return Document::new(primary);
        };

        let mut builder = DocumentBuilder::new();
        let mut stack = VisitStack::new();
        let meta = include_compiled_meta(&mut builder, compiled, &mut stack);
        primary.add_relationship("compiledMeta", Relationship::one(meta));

        Document {
            data: primary,
            included: Some(builder.into_included()),
        }
    }
}

/// Attribute set of the primary `raw-cards` resource.
fn raw_card_attrs() -> Vec<AttrSpec> {
    let mut attrs = vec![
        AttrSpec::field("id"),
        AttrSpec::field("realm"),
        AttrSpec::field("adoptsFrom"),
        AttrSpec::field("data"),
        AttrSpec::field("files"),
    ];
    attrs.extend(FEATURE_NAMES.iter().copied().map(AttrSpec::field));
    attrs
}

fn compiled_meta_attrs() -> Vec<AttrSpec> {
    vec![
        AttrSpec::field("schemaModule"),
        AttrSpec::field("serializerModule"),
        AttrSpec::field("deps"),
        AttrSpec::field("componentInfos"),
    ]
}

fn field_attrs() -> Vec<AttrSpec> {
    vec![
        AttrSpec::field("name"),
        AttrSpec::field("computed"),
        AttrSpec::alias("type", "fieldType"),
    ]
}

/// Includes `card` (and everything it reaches) in the document.
///
/// Memoized on the card's identity: a card already included, or still being
/// built further up the path, is not rebuilt; the reference alone is
/// returned. The in-progress half of that check keeps a re-entrant graph
/// from appending the same `(type, id)` twice.
fn include_compiled_meta(
    builder: &mut DocumentBuilder,
    card: &Arc<CompiledCard>,
    stack: &mut VisitStack,
) -> ResourceId {
    let identity = ResourceId::new(ResourceType::CompiledMetas, card.url.clone());
    if builder.contains(&identity) || stack.contains(&identity) {
        return identity;
    }

    stack.push(identity.clone());
    let source = json!({
        "schemaModule": card.schema_module,
        "serializerModule": card.serializer_module,
        "deps": card.deps,
        "componentInfos": card.component_infos,
    });
    let mut resource = project(
        ResourceType::CompiledMetas,
        card.url.clone(),
        &source,
        Some(&compiled_meta_attrs()),
    );

    if let Some(parent) = &card.adopts_from {
        let parent_ref = include_compiled_meta(builder, parent, stack);
        resource.add_relationship("adoptsFrom", Relationship::one(parent_ref));
    }

    let field_refs = card
        .fields
        .iter()
        .map(|field| include_field(builder, card, field, stack))
        .collect();
    resource.add_relationship("fields", Relationship::many(field_refs));

    stack.pop();
    builder.push(resource);
    identity
}

/// Includes one field of `parent` in the document.
///
/// A field whose value type leads back onto an identity still on the path
/// is suppressed outright: its resource is not appended and no `card`
/// relationship is wired, but the identity reference is still returned so
/// the parent's `fields` array stays fully populated.
fn include_field(
    builder: &mut DocumentBuilder,
    parent: &Arc<CompiledCard>,
    field: &Field,
    stack: &mut VisitStack,
) -> ResourceId {
    let identity = ResourceId::new(
        ResourceType::Fields,
        format!("{}/{}", parent.url, field.name),
    );
    if builder.contains(&identity) {
        return identity;
    }

    let source = json!({
        "name": field.name,
        "computed": field.computed,
        "fieldType": field.field_type,
    });
    let mut resource = project(
        ResourceType::Fields,
        identity.id.clone(),
        &source,
        Some(&field_attrs()),
    );

    let Some(card) = field.card.upgrade() else {
        warn!("field {} has a dangling card edge, omitting", identity);
        return identity;
    };
    let card_identity = ResourceId::new(ResourceType::CompiledMetas, card.url.clone());
    if stack.contains(&identity) || stack.contains(&card_identity) {
        debug!("cycle at {}, omitting field {}", card_identity, identity);
        return identity;
    }

    stack.push(identity.clone());
    let card_ref = include_compiled_meta(builder, &card, stack);
    stack.pop();
    resource.add_relationship("card", Relationship::one(card_ref));
    builder.push(resource);
    identity
}
