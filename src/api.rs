use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

use crate::contact::{
    ContactError, ContactHandler, FallbackPolicy, Relay, SilentFallbackPolicy, Web3FormsRelay,
};

pub const CONTACT_PATH: &str = "/api/contact";
/// Largest contact body read into memory.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub type SiteContactHandler = ContactHandler<Web3FormsRelay, SilentFallbackPolicy>;

/// Routes for the contact endpoint. Every method is routed so that anything
/// other than `POST` gets the JSON 405 body instead of axum's empty one.
pub fn contact_routes<R, P, S>(handler: Arc<ContactHandler<R, P>>) -> Router<S>
where
    R: Relay + 'static,
    P: FallbackPolicy + 'static,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(CONTACT_PATH, any(contact::<R, P>))
        .with_state(handler)
}

async fn contact<R, P>(
    State(handler): State<Arc<ContactHandler<R, P>>>,
    request: Request,
) -> Response
where
    R: Relay + 'static,
    P: FallbackPolicy + 'static,
{
    let (parts, body) = request.into_parts();
    let method = parts.method;
    // the body is only read once the method is known to be POST
    let reply = if method == Method::POST {
        match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => handler.handle(&method, &bytes).await,
            Err(e) => {
                tracing::warn!("couldn't read contact body: {e}");
                ContactError::Read(e.to_string()).into_reply()
            }
        }
    } else {
        handler.handle(&method, &[]).await
    };
    tracing::info!(%method, status = %reply.status, "contact request handled");
    (reply.status, Json(reply.body)).into_response()
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::contact::{EmailContent, RelayError, Submission};

    struct FixedRelay(StatusCode);

    impl Relay for FixedRelay {
        fn relay(
            &self,
            _submission: &Submission,
            _email: &EmailContent,
        ) -> impl Future<Output = Result<StatusCode, RelayError>> + Send {
            let status = self.0;
            async move { Ok(status) }
        }
    }

    fn app(status: StatusCode) -> Router {
        contact_routes(Arc::new(ContactHandler::new(
            FixedRelay(status),
            SilentFallbackPolicy,
            "owner@example.com",
        )))
    }

    async fn call(
        router: Router,
        method: Method,
        body: impl Into<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(CONTACT_PATH)
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_jane_end_to_end() {
        let (status, body) = call(
            app(StatusCode::OK),
            Method::POST,
            r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Email sent successfully!"})
        );
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let (status, body) = call(app(StatusCode::OK), Method::GET, "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn test_missing_fields_is_bad_request() {
        let (status, body) = call(app(StatusCode::OK), Method::POST, r#"{"name":"Jane"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn test_relay_failure_is_masked() {
        let (status, body) = call(
            app(StatusCode::BAD_GATEWAY),
            Method::POST,
            r#"{"name":"Jane","email":"jane@x.com","message":"Hi","budget":"$10k+"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Form submitted successfully!"})
        );
    }

    #[tokio::test]
    async fn test_oversized_get_is_method_not_allowed() {
        let body = vec![b'a'; MAX_BODY_BYTES + 1];
        let (status, body) = call(app(StatusCode::OK), Method::GET, body).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn test_oversized_post_is_server_error() {
        let body = vec![b' '; MAX_BODY_BYTES + 1];
        let (status, body) = call(app(StatusCode::OK), Method::POST, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process form submission");
        assert!(body["details"].is_string());
    }
}
