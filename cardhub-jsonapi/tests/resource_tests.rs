use cardhub_jsonapi::{
    Document, Relationship, RelationshipData, Resource, ResourceId, ResourceType,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── ResourceType ─────────────────────────────────────────────────

#[test]
fn resource_type_wire_strings() {
    assert_eq!(ResourceType::RawCards.as_str(), "raw-cards");
    assert_eq!(ResourceType::CompiledMetas.as_str(), "compiled-metas");
    assert_eq!(ResourceType::Fields.as_str(), "fields");
}

#[test]
fn resource_type_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(ResourceType::CompiledMetas).unwrap(),
        json!("compiled-metas")
    );
}

#[test]
fn resource_type_deserializes_from_wire_string() {
    let kind: ResourceType = serde_json::from_value(json!("raw-cards")).unwrap();
    assert_eq!(kind, ResourceType::RawCards);
}

#[test]
fn resource_type_display_matches_wire() {
    assert_eq!(ResourceType::Fields.to_string(), "fields");
}

// ── ResourceId ───────────────────────────────────────────────────

#[test]
fn resource_id_serializes_as_reference_object() {
    let reference = ResourceId::new(ResourceType::Fields, "https://demo.com/person/name");
    assert_eq!(
        serde_json::to_value(&reference).unwrap(),
        json!({ "type": "fields", "id": "https://demo.com/person/name" })
    );
}

#[test]
fn resource_id_roundtrips() {
    let reference = ResourceId::new(ResourceType::CompiledMetas, "https://demo.com/person");
    let wire = serde_json::to_string(&reference).unwrap();
    let back: ResourceId = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, reference);
}

#[test]
fn resource_id_display_is_type_colon_id() {
    let reference = ResourceId::new(ResourceType::RawCards, "r1card1");
    assert_eq!(reference.to_string(), "raw-cards:r1card1");
}

// ── Relationship ─────────────────────────────────────────────────

#[test]
fn to_one_relationship_shape() {
    let relationship = Relationship::one(ResourceId::new(ResourceType::CompiledMetas, "url"));
    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "data": { "type": "compiled-metas", "id": "url" } })
    );
}

#[test]
fn to_many_relationship_preserves_order() {
    let relationship = Relationship::many(vec![
        ResourceId::new(ResourceType::Fields, "url/b"),
        ResourceId::new(ResourceType::Fields, "url/a"),
    ]);
    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "data": [
            { "type": "fields", "id": "url/b" },
            { "type": "fields", "id": "url/a" },
        ]})
    );
}

#[test]
fn relationship_data_deserializes_untagged() {
    let one: Relationship =
        serde_json::from_value(json!({ "data": { "type": "fields", "id": "x" } })).unwrap();
    assert!(matches!(one.data, RelationshipData::One(_)));

    let many: Relationship = serde_json::from_value(json!({ "data": [] })).unwrap();
    assert!(matches!(many.data, RelationshipData::Many(ref items) if items.is_empty()));
}

// ── Resource ─────────────────────────────────────────────────────

#[test]
fn resource_stub_has_no_relationships_key() {
    let resource = Resource::new(ResourceType::RawCards, "r1card1");
    let wire = serde_json::to_value(&resource).unwrap();
    assert_eq!(
        wire,
        json!({ "id": "r1card1", "type": "raw-cards", "attributes": {} })
    );
    assert!(wire.get("relationships").is_none());
}

#[test]
fn add_relationship_creates_block_on_first_use() {
    let mut resource = Resource::new(ResourceType::CompiledMetas, "url");
    assert!(resource.relationships.is_none());

    resource.add_relationship(
        "fields",
        Relationship::many(vec![ResourceId::new(ResourceType::Fields, "url/name")]),
    );
    let relationships = resource.relationships.as_ref().unwrap();
    assert!(relationships.contains_key("fields"));
}

#[test]
fn resource_identity_matches_type_and_id() {
    let resource = Resource::new(ResourceType::Fields, "url/name");
    assert_eq!(
        resource.identity(),
        ResourceId::new(ResourceType::Fields, "url/name")
    );
}

#[test]
fn resource_deserializes_without_attributes() {
    let resource: Resource =
        serde_json::from_value(json!({ "id": "x", "type": "fields" })).unwrap();
    assert!(resource.attributes.is_empty());
    assert!(resource.relationships.is_none());
}

// ── Document ─────────────────────────────────────────────────────

#[test]
fn document_without_included_omits_the_key() {
    let document = Document::new(Resource::new(ResourceType::RawCards, "r1card1"));
    let wire = serde_json::to_value(&document).unwrap();
    assert!(wire.get("included").is_none());
}

#[test]
fn find_included_matches_type_and_id() {
    let mut document = Document::new(Resource::new(ResourceType::RawCards, "r1card1"));
    document.included = Some(vec![
        Resource::new(ResourceType::CompiledMetas, "url"),
        Resource::new(ResourceType::Fields, "url/name"),
    ]);

    let reference = ResourceId::new(ResourceType::Fields, "url/name");
    assert_eq!(document.find_included(&reference).unwrap().id, "url/name");

    let missing = ResourceId::new(ResourceType::CompiledMetas, "url/name");
    assert!(document.find_included(&missing).is_none());
}

#[test]
fn resolve_checks_primary_before_included() {
    let document = Document::new(Resource::new(ResourceType::RawCards, "r1card1"));
    let reference = ResourceId::new(ResourceType::RawCards, "r1card1");
    assert!(document.resolve(&reference).is_some());
    assert!(document.find_included(&reference).is_none());
}

#[test]
fn document_roundtrips() {
    let mut primary = Resource::new(ResourceType::RawCards, "r1card1");
    primary.add_relationship(
        "compiledMeta",
        Relationship::one(ResourceId::new(ResourceType::CompiledMetas, "url")),
    );
    let document = Document {
        data: primary,
        included: Some(vec![Resource::new(ResourceType::CompiledMetas, "url")]),
    };

    let wire = serde_json::to_string(&document).unwrap();
    let back: Document = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, document);
}
