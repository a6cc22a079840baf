//! HTTP error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use charsheets_domain::DomainError;

use crate::forms::FormValidation;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{CharacterSheetError, RegistrationError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden,
    /// Body was well-formed but broke a field rule (e.g. attribute out of range).
    Unprocessable(String),
    /// Form submission failed validation; carries the per-field messages.
    Validation(FormValidation),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response()
            }
            ApiError::Validation(validation) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            DomainError::Validation(_) | DomainError::Parse(_) => {
                ApiError::Unprocessable(e.to_string())
            }
        }
    }
}

impl From<CharacterSheetError> for ApiError {
    fn from(e: CharacterSheetError) -> Self {
        match e {
            CharacterSheetError::CharacterNotFound(_) | CharacterSheetError::UserNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            CharacterSheetError::Forbidden(_) => ApiError::Forbidden,
            CharacterSheetError::Domain(e) => e.into(),
            CharacterSheetError::Repo(e) => e.into(),
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Repo(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}
