use cardhub_jsonapi::ResourceType;
use cardhub_serializer::{AttrSpec, project};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Plain fields ─────────────────────────────────────────────────

#[test]
fn projects_requested_fields() {
    let source = json!({ "realm": "r/", "id": "card1", "ignored": true });
    let specs = [AttrSpec::field("realm"), AttrSpec::field("id")];
    let resource = project(ResourceType::RawCards, "r/card1", &source, Some(&specs));

    assert_eq!(resource.id, "r/card1");
    assert_eq!(resource.kind, ResourceType::RawCards);
    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "realm": "r/", "id": "card1" })
    );
}

#[test]
fn missing_field_projects_as_null() {
    let source = json!({ "realm": "r/" });
    let specs = [AttrSpec::field("realm"), AttrSpec::field("schema")];
    let resource = project(ResourceType::RawCards, "r/card1", &source, Some(&specs));

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "realm": "r/", "schema": null })
    );
    // requested means present: the key exists, as null
    assert!(resource.attributes.contains_key("schema"));
}

#[test]
fn nested_paths_read_and_write_at_depth() {
    let source = json!({ "componentInfos": { "embedded": { "moduleName": "embedded.js" } } });
    let specs = [AttrSpec::field("componentInfos.embedded.moduleName")];
    let resource = project(ResourceType::CompiledMetas, "url", &source, Some(&specs));

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "componentInfos": { "embedded": { "moduleName": "embedded.js" } } })
    );
}

#[test]
fn malformed_nested_path_projects_as_null() {
    let source = json!({ "deps": "not-an-object" });
    let specs = [AttrSpec::field("deps.child")];
    let resource = project(ResourceType::CompiledMetas, "url", &source, Some(&specs));

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "deps": { "child": null } })
    );
}

// ── Aliases ──────────────────────────────────────────────────────

#[test]
fn alias_writes_output_key_from_source_path() {
    let source = json!({ "name": "birthdate", "computed": false, "fieldType": "contains" });
    let specs = [
        AttrSpec::field("name"),
        AttrSpec::field("computed"),
        AttrSpec::alias("type", "fieldType"),
    ];
    let resource = project(ResourceType::Fields, "url/birthdate", &source, Some(&specs));

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "name": "birthdate", "computed": false, "type": "contains" })
    );
}

#[test]
fn alias_with_missing_source_is_null() {
    let source = json!({ "name": "birthdate" });
    let specs = [AttrSpec::alias("type", "fieldType")];
    let resource = project(ResourceType::Fields, "url/birthdate", &source, Some(&specs));

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "type": null })
    );
}

// ── Defaulted spec list ──────────────────────────────────────────

#[test]
fn no_spec_list_projects_own_keys() {
    let source = json!({ "realm": "r/", "id": "card1" });
    let resource = project(ResourceType::RawCards, "r/card1", &source, None);

    assert_eq!(
        serde_json::to_value(&resource.attributes).unwrap(),
        json!({ "realm": "r/", "id": "card1" })
    );
}

#[test]
fn no_spec_list_over_non_object_is_empty() {
    let source = json!("just a string");
    let resource = project(ResourceType::RawCards, "r/card1", &source, None);
    assert!(resource.attributes.is_empty());
}

// ── Stub shape ───────────────────────────────────────────────────

#[test]
fn stub_carries_no_relationships() {
    let source = json!({ "realm": "r/" });
    let resource = project(ResourceType::RawCards, "r/card1", &source, Some(&[]));
    assert!(resource.relationships.is_none());
}
