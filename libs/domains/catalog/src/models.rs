use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::Display;
use utoipa::ToSchema;

/// The two collections held by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionKind {
    Products,
    Categories,
}

/// A record stored in one of the catalog collections.
///
/// Every record carries a string identifier; everything else is owned by the
/// concrete type and opaque to the lookup machinery.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection this record type lives in
    const KIND: CollectionKind;

    fn id(&self) -> &str;

    /// Overwrite the identifier, whatever the client sent
    fn assign_id(&mut self, id: String);
}

/// Product entity
///
/// Decoding is lenient: a client `id` of any type is dropped, and a `name` or
/// `categoryId` that is not a string stays in `attributes` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct Product {
    /// Unique 36-character identifier, assigned by the server
    #[serde(default)]
    pub id: String,
    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category this product belongs to (not checked against the categories)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Remaining descriptive fields, kept as sent
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

/// Category entity, decoded as leniently as [`Product`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct Category {
    /// Unique 36-character identifier, assigned by the server
    #[serde(default)]
    pub id: String,
    /// Category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining descriptive fields, kept as sent
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

/// Client ids are never kept; only a string survives, and only for seeding
fn take_id(fields: &mut Map<String, Value>) -> String {
    match fields.remove("id") {
        Some(Value::String(id)) => id,
        _ => String::new(),
    }
}

/// Lift `key` out of `fields` when it holds a string, otherwise leave it there
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(value) => Some(value),
        other => {
            fields.insert(key.to_string(), other);
            None
        }
    }
}

impl From<Map<String, Value>> for Product {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            id: take_id(&mut fields),
            name: take_string(&mut fields, "name"),
            category_id: take_string(&mut fields, "categoryId"),
            attributes: fields,
        }
    }
}

impl From<Map<String, Value>> for Category {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            id: take_id(&mut fields),
            name: take_string(&mut fields, "name"),
            attributes: fields,
        }
    }
}

impl Product {
    pub fn new(name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: Some(name.into()),
            category_id: Some(category_id.into()),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque descriptive field
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id.as_deref() == Some(category_id)
    }
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: Some(name.into()),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl Record for Product {
    const KIND: CollectionKind = CollectionKind::Products;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Category {
    const KIND: CollectionKind = CollectionKind::Categories;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
