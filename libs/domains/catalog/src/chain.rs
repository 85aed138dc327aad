//! Request middleware chains.
//!
//! Every route runs an ordered list of [`Step`]s before its terminal
//! operation. A step inspects the [`RequestContext`] (and may read the
//! catalog), records what it found, and either lets the request through with
//! [`Flow::Continue`] or stops it with [`Flow::Halt`]. A halted request never
//! reaches the terminal operation, and no step mutates the catalog.
//!
//! ```text
//! PUT /products/{id}
//!   check_id_length -> check_name_length -> select_product_collection
//!     -> find_element_index -> replace
//! ```

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::ids::ID_LENGTH;
use crate::models::{CollectionKind, Record};
use crate::store::Catalog;

/// Minimum accepted length of a record's `name`
pub const MIN_NAME_LENGTH: usize = 3;

/// Outcome of a single step
#[derive(Debug)]
pub enum Flow {
    Continue,
    Halt(CatalogError),
}

/// A middleware step
pub type Step = fn(&mut RequestContext, &Catalog) -> Flow;

/// Element resolved by [`find_element_index`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub id: String,
}

/// Per-request state threaded through a chain
#[derive(Debug, Default)]
pub struct RequestContext {
    path_id: Option<String>,
    body: Option<Result<Value, CatalogError>>,
    collection: Option<CollectionKind>,
    matched: Option<Match>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a route with an `{id}` path parameter
    pub fn for_path(id: impl Into<String>) -> Self {
        Self {
            path_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Attach the request body. A rejected body is kept and only reported
    /// when something actually needs the record.
    pub fn with_body(mut self, body: Result<Json<Value>, JsonRejection>) -> Self {
        self.body = Some(
            body.map(|Json(value)| value)
                .map_err(|rejection| CatalogError::MalformedBody(rejection.body_text())),
        );
        self
    }

    pub fn with_json(mut self, value: Value) -> Self {
        self.body = Some(Ok(value));
        self
    }

    pub fn path_id(&self) -> &str {
        self.path_id.as_deref().unwrap_or_default()
    }

    /// Length of the body's `name`; missing, non-string or unreadable counts as 0
    pub fn name_length(&self) -> usize {
        match &self.body {
            Some(Ok(body)) => body
                .get("name")
                .and_then(Value::as_str)
                .map_or(0, |name| name.chars().count()),
            _ => 0,
        }
    }

    pub fn collection(&self) -> Option<CollectionKind> {
        self.collection
    }

    pub fn matched(&self) -> Option<&Match> {
        self.matched.as_ref()
    }

    /// Hand the resolved element over to the terminal operation
    pub fn take_match(&mut self) -> CatalogResult<Match> {
        self.matched.take().ok_or(CatalogError::ElementNotFound)
    }

    /// Decode the body into a record; only a body that is not a JSON object fails
    pub fn take_record<T: Record>(&mut self) -> CatalogResult<T> {
        match self.body.take() {
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Err(err)) => Err(err),
            None => Err(CatalogError::MalformedBody(
                "Request body is required".to_string(),
            )),
        }
    }
}

/// Run `steps` in order, stopping at the first halt
pub fn run(steps: &[Step], cx: &mut RequestContext, catalog: &Catalog) -> CatalogResult<()> {
    for step in steps {
        if let Flow::Halt(err) = step(cx, catalog) {
            return Err(err);
        }
    }
    Ok(())
}

/// Halts unless the path id is exactly [`ID_LENGTH`] characters.
///
/// Length is counted in Unicode scalar values, so an id holding a character
/// outside the Basic Multilingual Plane counts that character once, where a
/// UTF-16 length would count it twice.
pub fn check_id_length(cx: &mut RequestContext, _: &Catalog) -> Flow {
    if cx.path_id().chars().count() != ID_LENGTH {
        return Flow::Halt(CatalogError::InvalidIdLength);
    }
    Flow::Continue
}

pub fn check_name_length(cx: &mut RequestContext, _: &Catalog) -> Flow {
    if cx.name_length() < MIN_NAME_LENGTH {
        return Flow::Halt(CatalogError::NameTooShort);
    }
    Flow::Continue
}

pub fn select_product_collection(cx: &mut RequestContext, _: &Catalog) -> Flow {
    cx.collection = Some(CollectionKind::Products);
    Flow::Continue
}

pub fn select_category_collection(cx: &mut RequestContext, _: &Catalog) -> Flow {
    cx.collection = Some(CollectionKind::Categories);
    Flow::Continue
}

/// Resolve the path id within the selected collection
pub fn find_element_index(cx: &mut RequestContext, catalog: &Catalog) -> Flow {
    let Some(kind) = cx.collection else {
        return Flow::Halt(CatalogError::NoCollectionSelected);
    };

    let id = cx.path_id().to_string();
    match catalog.position(kind, &id) {
        Some(index) => {
            tracing::debug!(collection = %kind, %id, index, "resolved element");
            cx.matched = Some(Match { index, id });
            Flow::Continue
        }
        None => Flow::Halt(CatalogError::ElementNotFound),
    }
}
