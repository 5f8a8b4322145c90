use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Target of the canonical redirect for `host`, or `None` when the host is
/// already canonical.
pub fn canonical_location(host: &str, path_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    if bare.is_empty() {
        return None;
    }
    let path_query = if path_query.is_empty() { "/" } else { path_query };
    Some(format!("https://{bare}{path_query}"))
}

/// Permanently redirects `www.` requests to the bare domain.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let location = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .and_then(|host| {
            let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
            canonical_location(host, path_query)
        });

    if let Some(location) = location {
        tracing::debug!(%location, "redirecting to canonical host");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    #[test]
    fn test_www_host_redirects() {
        assert_eq!(
            canonical_location("www.creatorsguild.org", "/events?month=4"),
            Some("https://creatorsguild.org/events?month=4".to_owned())
        );
    }

    #[test]
    fn test_bare_host_is_left_alone() {
        assert_eq!(canonical_location("creatorsguild.org", "/"), None);
        assert_eq!(canonical_location("127.0.0.1:3007", "/about"), None);
    }

    #[test]
    fn test_empty_path_becomes_root() {
        assert_eq!(canonical_location("www.example.com", ""), Some("https://example.com/".to_owned()));
    }

    #[test]
    fn test_bare_www_prefix_only() {
        assert_eq!(canonical_location("www.", "/"), None);
    }

    #[tokio::test]
    async fn test_middleware_redirects_www() {
        let app = Router::new()
            .route("/about", get(|| async { "about" }))
            .layer(middleware::from_fn(redirect_www));

        let request = Request::builder()
            .uri("/about")
            .header(header::HOST, "www.creatorsguild.org")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "https://creatorsguild.org/about");
    }

    #[tokio::test]
    async fn test_middleware_passes_through() {
        let app = Router::new()
            .route("/about", get(|| async { "about" }))
            .layer(middleware::from_fn(redirect_www));

        let request = Request::builder()
            .uri("/about")
            .header(header::HOST, "creatorsguild.org")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
