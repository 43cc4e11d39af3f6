//! Dotted attribute paths with read/write semantics over JSON trees.

use serde_json::{Map, Value};

/// One step of an attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member access.
    Key(String),
    /// Array element access. On reads an index also matches an object
    /// member whose key is the decimal form of the index.
    Index(usize),
}

/// A parsed dotted path, e.g. `componentInfos.embedded.moduleName`.
///
/// Paths address positions in a JSON tree at arbitrary depth. Reads that run
/// off the tree resolve to nothing rather than erroring; the projector maps
/// that to `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrPath {
    segments: Vec<Segment>,
}

impl AttrPath {
    /// Parses a dotted path. All-digit segments address array elements;
    /// everything else is an object key. The empty string parses to the
    /// empty path, which reads and writes nothing.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        let segments = path
            .split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(index) if part.bytes().all(|b| b.is_ascii_digit()) => Segment::Index(index),
                _ => Segment::Key(part.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// The parsed segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reads the value at this path.
    ///
    /// Returns `None` when any step is missing, a step's container has the
    /// wrong shape, or the path is empty.
    #[must_use]
    pub fn read<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        if self.segments.is_empty() {
            return None;
        }
        let mut current = source;
        for segment in &self.segments {
            current = match segment {
                Segment::Key(key) => current.as_object()?.get(key)?,
                Segment::Index(index) => match current {
                    Value::Array(items) => items.get(*index)?,
                    Value::Object(map) => map.get(&index.to_string())?,
                    _ => return None,
                },
            };
        }
        Some(current)
    }

    /// Writes `value` at this path, creating intermediate objects and arrays
    /// as needed.
    ///
    /// Arrays grown to fit an index are padded with `null`; an intermediate
    /// value of the wrong shape is replaced by a fresh container. An empty
    /// path writes nothing.
    pub fn write(&self, target: &mut Value, value: Value) {
        if self.segments.is_empty() {
            return;
        }
        write_in(&self.segments, target, value);
    }
}

fn write_in(segments: &[Segment], target: &mut Value, value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *target = value;
        return;
    };
    match segment {
        Segment::Key(key) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(map) = target {
                let slot = map.entry(key.clone()).or_insert(Value::Null);
                write_in(rest, slot, value);
            }
        }
        Segment::Index(index) => {
            if !target.is_array() {
                *target = Value::Array(Vec::new());
            }
            if let Value::Array(items) = target {
                if items.len() <= *index {
                    items.resize(index + 1, Value::Null);
                }
                write_in(rest, &mut items[*index], value);
            }
        }
    }
}
