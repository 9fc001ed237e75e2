//! Custom Axum extractors

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{RecipeField, ValidationError};

/// Header htmx sets on every request it issues
pub const HX_REQUEST: &str = "hx-request";

/// Header telling htmx to navigate after the response is handled
pub const HX_REDIRECT: &str = "hx-redirect";

/// Header overriding the element htmx swaps the response into
pub const HX_RETARGET: &str = "hx-retarget";

/// Header overriding how htmx swaps the response
pub const HX_RESWAP: &str = "hx-reswap";

/// Read one named segment from the matched route.
async fn path_param<S>(parts: &mut Parts, state: &S, name: &'static str) -> Result<String, ApiError>
where
    S: Send + Sync,
{
    let Path(params): Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| ApiError::Validation(ValidationError::Empty { field: name }))?;

    params
        .get(name)
        .cloned()
        .ok_or(ApiError::Validation(ValidationError::Empty { field: name }))
}

fn parse_id(raw: &str, field: &'static str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "must be a whole number",
        })
    })
}

/// Extract a recipe id from the `{id}` segment
pub struct RecipeId(pub i64);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = path_param(parts, state, "id").await?;
        Ok(Self(parse_id(&raw, "recipe id")?))
    }
}

/// Extract a link id from the `{url_id}` segment
pub struct UrlId(pub i64);

impl<S> FromRequestParts<S> for UrlId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = path_param(parts, state, "url_id").await?;
        Ok(Self(parse_id(&raw, "link id")?))
    }
}

/// Extract and validate an editable field name from the `{field}` segment
pub struct ValidField(pub RecipeField);

impl<S> FromRequestParts<S> for ValidField
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = path_param(parts, state, "field").await?;
        Ok(Self(raw.parse()?))
    }
}

/// Whether the request came from htmx rather than a full navigation
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get(HX_REQUEST)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        Ok(Self(is_htmx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn detects_htmx_header() {
        let (mut parts, _) = Request::builder()
            .uri("/recipes")
            .header("HX-Request", "true")
            .body(())
            .unwrap()
            .into_parts();
        let HxRequest(is_htmx) = HxRequest::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(is_htmx);

        let (mut parts, _) = Request::builder().uri("/recipes").body(()).unwrap().into_parts();
        let HxRequest(is_htmx) = HxRequest::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(!is_htmx);
    }

    #[test]
    fn ids_must_be_numeric() {
        assert_eq!(parse_id("42", "recipe id").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "recipe id"),
            Err(ApiError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }
}
