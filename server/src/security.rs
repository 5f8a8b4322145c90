use app::csp::content_security_policy;
use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{self, HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Static headers added to every response.
const STATIC_HEADERS: &[(&str, &str)] = &[
    // Nobody may frame this site.
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=()",
    ),
];

/// Adds the security headers to all responses.
///
/// Rendered pages already carry a CSP naming their script nonce; that one is
/// kept. Everything else gets the nonce-free policy.
pub async fn security_headers(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in STATIC_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    if !headers.contains_key(header::CONTENT_SECURITY_POLICY) {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_str(&content_security_policy(None))
                .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'")),
        );
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, response::IntoResponse, routing::get};
    use tower::ServiceExt as _;

    #[test]
    fn test_csp_is_valid_header() {
        assert!(HeaderValue::from_str(&content_security_policy(None)).is_ok());
        assert!(HeaderValue::from_str(&content_security_policy(Some("n0nce"))).is_ok());
    }

    #[tokio::test]
    async fn test_headers_are_added() {
        let app = Router::new()
            .route("/", get(|| async { "home" }))
            .layer(middleware::from_fn(security_headers));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert!(headers.contains_key("strict-transport-security"));
        assert!(headers.contains_key("permissions-policy"));
        assert_eq!(
            headers[header::CONTENT_SECURITY_POLICY].to_str().unwrap(),
            content_security_policy(None)
        );
    }

    #[tokio::test]
    async fn test_existing_policy_is_kept() {
        let page_policy = content_security_policy(Some("abc"));
        let app = Router::new()
            .route(
                "/",
                get({
                    let page_policy = page_policy.clone();
                    move || {
                        let page_policy = page_policy.clone();
                        async move { ([(header::CONTENT_SECURITY_POLICY, page_policy)], "page").into_response() }
                    }
                }),
            )
            .layer(middleware::from_fn(security_headers));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::CONTENT_SECURITY_POLICY].to_str().unwrap(),
            page_policy
        );
    }
}
