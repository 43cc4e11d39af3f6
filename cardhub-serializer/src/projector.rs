//! Projection of domain payloads into resource stubs.

use crate::path::AttrPath;
use cardhub_jsonapi::{Resource, ResourceType};
use serde_json::{Map, Value};

/// One attribute to project into a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrSpec {
    /// Read this path from the source and write it to the same path.
    Field(String),
    /// Read `source` and write the value under `output` instead.
    Alias { output: String, source: String },
}

impl AttrSpec {
    #[must_use]
    pub fn field(path: impl Into<String>) -> Self {
        Self::Field(path.into())
    }

    #[must_use]
    pub fn alias(output: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Alias {
            output: output.into(),
            source: source.into(),
        }
    }
}

/// Projects `source` into a resource stub `{ id, type, attributes }`.
///
/// With no spec list, the source object's own keys are projected. Paths the
/// source cannot satisfy are written as `null`: an attribute requested is
/// an attribute present. The stub carries no relationships; callers attach
/// those afterwards.
#[must_use]
pub fn project(
    kind: ResourceType,
    id: impl Into<String>,
    source: &Value,
    specs: Option<&[AttrSpec]>,
) -> Resource {
    let mut resource = Resource::new(kind, id);
    let mut attributes = Value::Object(Map::new());

    match specs {
        Some(specs) => {
            for spec in specs {
                project_one(spec, source, &mut attributes);
            }
        }
        None => {
            if let Value::Object(map) = source {
                for key in map.keys() {
                    project_one(&AttrSpec::field(key.clone()), source, &mut attributes);
                }
            }
        }
    }

    if let Value::Object(map) = attributes {
        resource.attributes = map;
    }
    resource
}

fn project_one(spec: &AttrSpec, source: &Value, attributes: &mut Value) {
    let (output, input) = match spec {
        AttrSpec::Field(path) => (path.as_str(), path.as_str()),
        AttrSpec::Alias { output, source } => (output.as_str(), source.as_str()),
    };
    let value = AttrPath::parse(input)
        .read(source)
        .cloned()
        .unwrap_or(Value::Null);
    AttrPath::parse(output).write(attributes, value);
}
