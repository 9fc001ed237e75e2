//! API error types with IntoResponse
//!
//! Errors render as small HTML notices. htmx is told to put them in the
//! page's flash slot instead of the element that made the request, so an
//! inline editor survives a rejected save. Full-page requests get a
//! complete error page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::extractors::{HX_RESWAP, HX_RETARGET};
use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::render;

/// Selector of the notice slot every page carries
pub const FLASH_TARGET: &str = "#flash";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found, fragment response (404)
    NotFound { resource: &'static str, id: String },

    /// Resource not found while rendering a full page (404)
    PageNotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn page_not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::PageNotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, markup) = match &self {
            Self::PageNotFound { resource, id } => {
                let page = render::error_page("Not found", &format!("{} '{}' not found", resource, id));
                return (StatusCode::NOT_FOUND, Html(page.into_string())).into_response();
            }
            Self::Validation(e) => (StatusCode::BAD_REQUEST, render::error_notice(&e.to_string())),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                render::error_notice(&format!("{} '{}' not found", resource, id)),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::error_notice("Something went wrong. Please try again."),
                )
            }
        };

        (
            status,
            [(HX_RETARGET, FLASH_TARGET), (HX_RESWAP, "innerHTML")],
            Html(markup.into_string()),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
