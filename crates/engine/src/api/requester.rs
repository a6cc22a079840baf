//! Identification of the user a request acts for.
//!
//! Sessions and authentication live in front of this service; the
//! gateway forwards the signed-in user's id in `X-User-Id`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use charsheets_domain::UserId;
use uuid::Uuid;

use super::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The requesting user, taken from the `X-User-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester(pub UserId);

impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| ApiError::Unauthorized("Missing X-User-Id header".to_string()))?
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Malformed X-User-Id header".to_string()))?;

        let uuid = Uuid::parse_str(raw.trim())
            .map_err(|_| ApiError::Unauthorized("Malformed X-User-Id header".to_string()))?;

        Ok(Self(UserId::from_uuid(uuid)))
    }
}
