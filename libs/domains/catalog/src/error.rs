use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Id should be 36 characters long")]
    InvalidIdLength,

    #[error("Name should be 3 characters minimum")]
    NameTooShort,

    /// Raised by the index lookup step
    #[error("Not Found")]
    ElementNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("{0}")]
    MalformedBody(String),

    #[error("No collection selected before index lookup")]
    NoCollectionSelected,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::InvalidIdLength | CatalogError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            CatalogError::NameTooShort => StatusCode::CONFLICT,
            CatalogError::ElementNotFound
            | CatalogError::ProductNotFound
            | CatalogError::CategoryNotFound => StatusCode::NOT_FOUND,
            CatalogError::NoCollectionSelected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors go back as plain text bodies carrying the message alone
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::info!(status = status.as_u16(), "{}", self);
        }

        (status, self.to_string()).into_response()
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::MalformedBody(format!("Invalid body: {}", err))
    }
}
