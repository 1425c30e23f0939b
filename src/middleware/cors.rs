// CORS configuration

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer from the configured origin list. A literal
/// `*` anywhere in the list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_origin() {
        // Should not panic building the permissive layer.
        let _ = cors_layer(&["*".to_string()]);
    }

    #[test]
    fn test_explicit_origin_list() {
        let _ = cors_layer(&[
            "http://localhost:5173".to_string(),
            "https://app.example.com".to_string(),
        ]);
    }
}
