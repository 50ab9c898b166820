//! JSON body extraction with engine error mapping.
//!
//! Bodies that fail to decode are reported like any other engine error:
//! a 400 with the `{error, message}` body, never the framework's plain-text
//! rejection.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use super::routes::ApiError;
use crate::api::{CalculateFinalRequest, CompareRequest, NewGameRequest};
use crate::core::GameError;
use crate::games::war::SessionSnapshot;

/// Error a request body maps to when it cannot be decoded.
pub trait MalformedBody {
    fn malformed(message: String) -> GameError;
}

impl MalformedBody for SessionSnapshot {
    fn malformed(message: String) -> GameError {
        GameError::InvalidSnapshot(message)
    }
}

impl MalformedBody for CompareRequest {
    fn malformed(message: String) -> GameError {
        GameError::InvalidCard(message)
    }
}

impl MalformedBody for NewGameRequest {
    fn malformed(message: String) -> GameError {
        GameError::InvalidRequest(message)
    }
}

impl MalformedBody for CalculateFinalRequest {
    fn malformed(message: String) -> GameError {
        GameError::InvalidRequest(message)
    }
}

/// `Json` extractor whose rejection is an `ApiError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: MalformedBody,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(T::malformed(rejection.body_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_kinds() {
        assert_eq!(SessionSnapshot::malformed("x".into()).kind(), "invalid_snapshot");
        assert_eq!(CompareRequest::malformed("x".into()).kind(), "invalid_card");
        assert_eq!(NewGameRequest::malformed("x".into()).kind(), "invalid_request");
        assert_eq!(
            CalculateFinalRequest::malformed("x".into()).kind(),
            "invalid_request"
        );
    }
}
