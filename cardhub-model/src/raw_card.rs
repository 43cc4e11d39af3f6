//! Unprocessed card source records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed set of feature-module slots a raw card may carry.
///
/// Each names a module the card supplies for one rendering or processing
/// concern; all of them are projected into the serialized resource whether
/// present or not (absent slots become `null` attributes).
pub const FEATURE_NAMES: &[&str] = &["schema", "isolated", "embedded", "edit", "serializer"];

/// An unprocessed card source record.
///
/// Identified by `realm` plus `id`; the two concatenate (no separator) into
/// the card's global resource id, see [`RawCard::global_id`]. Raw cards are
/// immutable for the duration of one serialization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    /// Realm the card lives in (a URL prefix, e.g. `https://demo.com/`).
    pub realm: String,
    /// Card id within the realm.
    pub id: String,
    /// Arbitrary user data payload. `Value::Null` when the card has none.
    #[serde(default)]
    pub data: Value,
    /// Source files belonging to the card.
    #[serde(default)]
    pub files: Vec<String>,
    /// URL of the parent card this card adopts from.
    #[serde(default)]
    pub adopts_from: Option<String>,
    /// Feature-module slots, see [`FEATURE_NAMES`].
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub isolated: Option<String>,
    #[serde(default)]
    pub embedded: Option<String>,
    #[serde(default)]
    pub edit: Option<String>,
    #[serde(default)]
    pub serializer: Option<String>,
}

impl RawCard {
    /// Creates a card with the given identity and no payload.
    #[must_use]
    pub fn new(realm: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            id: id.into(),
            data: Value::Null,
            files: Vec::new(),
            adopts_from: None,
            schema: None,
            isolated: None,
            embedded: None,
            edit: None,
            serializer: None,
        }
    }

    /// The card's global resource id: realm and id concatenated with no
    /// separator. Distinct `(realm, id)` pairs can collide when a realm
    /// suffix doubles as an id prefix; the flat id space accepts that.
    #[must_use]
    pub fn global_id(&self) -> String {
        format!("{}{}", self.realm, self.id)
    }
}
