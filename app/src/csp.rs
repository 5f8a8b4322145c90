//! Content security policy shared by rendered pages and the server.
//!
//! Rendered pages carry inline hydration scripts tagged with the per-request
//! nonce, so their policy must name that nonce. Responses without inline
//! scripts (static files, `/health`) get the policy without one.

/// Origins allowed to be framed; the contact page embeds a Google map.
pub const FRAME_SOURCES: &[&str] = &["https://www.google.com", "https://maps.google.com"];

pub fn content_security_policy(nonce: Option<&str>) -> String {
    // 'wasm-unsafe-eval' is needed to instantiate the wasm bundle.
    let script_src = match nonce {
        Some(nonce) => format!("script-src 'self' 'nonce-{nonce}' 'wasm-unsafe-eval'"),
        None => "script-src 'self' 'wasm-unsafe-eval'".to_owned(),
    };
    let frame_src = format!("frame-src {}", FRAME_SOURCES.join(" "));
    [
        "default-src 'self'",
        script_src.as_str(),
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        frame_src.as_str(),
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ")
}

/// Sets the policy for the page being rendered, using the request nonce.
///
/// Only does anything during SSR; the server's header middleware leaves an
/// existing policy in place.
pub fn provide_page_policy() {
    #[cfg(feature = "ssr")]
    {
        use http::header::{CONTENT_SECURITY_POLICY, HeaderValue};
        use leptos::prelude::*;
        use leptos_axum::ResponseOptions;

        let Some(response) = use_context::<ResponseOptions>() else {
            return;
        };
        let nonce = use_nonce().map(|nonce| nonce.to_string());
        if nonce.is_none() {
            tracing::warn!("no CSP nonce for this request; inline scripts will be blocked");
        }
        match HeaderValue::from_str(&content_security_policy(nonce.as_deref())) {
            Ok(value) => response.insert_header(CONTENT_SECURITY_POLICY, value),
            Err(err) => tracing::error!(%err, "invalid content security policy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_policy_with_nonce() {
        let csp = content_security_policy(Some("abc123"));
        assert!(csp.contains("script-src 'self' 'nonce-abc123' 'wasm-unsafe-eval'"));
    }

    #[test]
    fn test_policy_without_nonce() {
        let csp = content_security_policy(None);
        assert!(csp.contains("script-src 'self' 'wasm-unsafe-eval'"));
        assert!(!csp.contains("nonce-"));
    }

    #[test]
    fn test_policy_allows_map_frame_only() {
        let csp = content_security_policy(None);
        assert!(csp.contains("frame-src https://www.google.com https://maps.google.com"));
        assert!(csp.contains("frame-ancestors 'none'"));
    }

    #[test]
    fn test_policy_without_response_context_is_a_no_op() {
        let owner = Owner::new();
        owner.with(provide_page_policy);
    }
}
