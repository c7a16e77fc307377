//! Gateway prefix stripping.
//!
//! Deployed behind a rewrite (e.g. `/pyapi/health` → this service), requests can
//! arrive with the gateway's prefix still attached. The prefix is removed before
//! routing so the same router serves both local and proxied traffic.

use axum::{
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PathPrefix {
    prefix: String,
}

impl PathPrefix {
    /// Trailing slashes are ignored, so "/pyapi/" and "/pyapi" are the same prefix.
    /// An empty prefix disables stripping.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the path with the prefix removed, or `None` when the path is not
    /// under the prefix. An exact match maps to "/".
    pub fn strip(&self, path: &str) -> Option<String> {
        if self.prefix.is_empty() {
            return None;
        }
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }
}

/// Middleware: rewrites the request URI before the inner router matches it.
pub async fn strip_path_prefix(
    State(prefix): State<PathPrefix>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(path) = prefix.strip(req.uri().path()) {
        match rewrite_path(req.uri(), &path) {
            Ok(uri) => {
                debug!(from = %req.uri(), to = %uri, "Stripped path prefix");
                *req.uri_mut() = uri;
            }
            Err(e) => warn!("Could not strip prefix from {}: {e}", req.uri()),
        }
    }
    next.run(req).await
}

/// Replaces the path of `uri`, keeping scheme, authority and query.
fn rewrite_path(uri: &Uri, path: &str) -> anyhow::Result<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse()?);
    Ok(Uri::from_parts(parts)?)
}
