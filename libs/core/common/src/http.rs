use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::response::ServiceOutcome;

/// Turn a service outcome into an HTTP response.
///
/// Success is serialized with `status`; every failure becomes
/// `400 Bad Request` carrying the `MessageResponse` body.
pub fn respond<T: Serialize>(outcome: ServiceOutcome<T>, status: StatusCode) -> Response {
    match outcome.into_result() {
        Ok(body) => (status, Json(body)).into_response(),
        Err(failure) => {
            tracing::debug!(message = %failure, "Request failed");
            (StatusCode::BAD_REQUEST, Json(failure)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::Either;
    use crate::response::MessageResponse;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_failure_maps_to_bad_request() {
        let outcome: ServiceOutcome<u32> = Either::from_error(MessageResponse::new("nope"));
        let response = respond(outcome, StatusCode::CREATED);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "nope");
    }

    #[tokio::test]
    async fn test_success_uses_given_status() {
        let outcome: ServiceOutcome<u32> = Either::from_success(5);
        let response = respond(outcome, StatusCode::CREATED);

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
