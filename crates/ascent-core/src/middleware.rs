use std::time::Duration;

use http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build the request-id layer. Apply with `.layer(request_id_layer())` in router.
/// An id already present on the request is kept.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeUuidRequestId)
}

/// Copy the request id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// CORS for browser clients. `*` (or an empty list) allows any origin;
/// otherwise only the listed origins. Entries that are not valid header
/// values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    ::tracing::warn!(origin = %o, "skipping invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    #[test]
    fn should_generate_request_id_header_value() {
        let request = http::Request::new(());
        let id = MakeUuidRequestId.make_request_id(&request).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    /// `access-control-allow-origin` returned for a request from `origin`.
    async fn allowed_origin(origins: &[&str], origin: &str) -> Option<HeaderValue> {
        let origins: Vec<String> = origins.iter().map(|o| (*o).to_owned()).collect();
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(&origins));
        let request = http::Request::builder()
            .uri("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn should_echo_only_listed_origins() {
        let listed = ["https://app.example.com", "bad\norigin"];
        assert_eq!(
            allowed_origin(&listed, "https://app.example.com").await,
            Some(HeaderValue::from_static("https://app.example.com"))
        );
        assert_eq!(allowed_origin(&listed, "https://evil.example.com").await, None);
    }

    #[tokio::test]
    async fn should_allow_any_origin_for_wildcard_or_empty_list() {
        let any = Some(HeaderValue::from_static("*"));
        assert_eq!(allowed_origin(&["*"], "https://anywhere.example").await, any);
        assert_eq!(allowed_origin(&[], "https://anywhere.example").await, any);
    }
}
