use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body mode whose payload is a serialized JSON document.
pub const JSON_BODY_MODE: &str = "json";

/// Key of the body slot holding the serialized JSON payload.
pub const JSON_PAYLOAD_KEY: &str = "json";

/// One node of a request collection: a nested folder or a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "folder")]
    Folder(Folder),
    #[serde(rename = "http")]
    Request(RequestItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Folder(folder) => &folder.name,
            Item::Request(request) => &request.name,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Item::Folder(folder) => Some(folder),
            Item::Request(_) => None,
        }
    }

    pub fn as_request(&self) -> Option<&RequestItem> {
        match self {
            Item::Request(request) => Some(request),
            Item::Folder(_) => None,
        }
    }
}

impl From<Folder> for Item {
    fn from(folder: Folder) -> Self {
        Item::Folder(folder)
    }
}

impl From<RequestItem> for Item {
    fn from(request: RequestItem) -> Self {
        Item::Request(request)
    }
}

/// A named, ordered container of items. The root of a request collection is a folder too.
///
/// Keys the engine does not interpret (`seq`, `root`, `version`, ...) are kept in `extra`
/// so a collection survives a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            extra: Map::new(),
        }
    }
}

/// A named request entry of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    #[serde(default)]
    pub request: Request,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestItem {
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            request,
            extra: Map::new(),
        }
    }
}

/// The definition of a single API call.
///
/// `url`, `params`, `script` and `body` are opaque to the engine apart from the body
/// `mode` discriminator and its JSON payload slot. The first three keep an explicit
/// `null` (`Some(Value::Null)`) apart from an absent key (`None`) and write it back out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub script: Option<Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub body: Value,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Request {
    /// The body `mode` discriminator, if the body declares one.
    pub fn body_mode(&self) -> Option<&str> {
        self.body.get("mode").and_then(Value::as_str)
    }

    pub fn has_json_body(&self) -> bool {
        self.body_mode() == Some(JSON_BODY_MODE)
    }

    /// The current JSON payload slot of the body.
    pub fn json_payload(&self) -> Option<&str> {
        self.body.get(JSON_PAYLOAD_KEY).and_then(Value::as_str)
    }

    /// Returns a copy of this request whose JSON payload slot holds `payload`.
    ///
    /// A body that is not an object has no slot to write and is returned unchanged.
    pub fn with_json_payload(&self, payload: String) -> Self {
        let mut request = self.clone();
        if let Value::Object(body) = &mut request.body {
            body.insert(JSON_PAYLOAD_KEY.to_string(), Value::String(payload));
        }
        request
    }
}

/// Keeps a key that is present with `null` as `Some(Value::Null)`.
pub(crate) fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
