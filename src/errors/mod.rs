//! Error types for the catalog core.
//!
//! Read-side operations surface these directly; mutating operations fold
//! store failures into the `ServiceResponse` outcome instead (see
//! `crate::dto::response`).

use thiserror::Error;

/// Failures a read-side catalog operation can surface to the boundary layer.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Entity store failure
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Image asset store failure
    #[error("image storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
