/// Custom request extractors
///
/// Todo resources carry an absolute `url` field that must reflect the host
/// the client actually reached, so the base URL is rebuilt from each request
/// instead of being configured or stored.
use axum::async_trait;
use axum::extract::{FromRequestParts, Host};
use axum::http::request::Parts;
use std::convert::Infallible;

/// The scheme and authority of the incoming request, e.g. `http://localhost:5000`.
///
/// The scheme comes from `X-Forwarded-Proto` when a proxy supplies it and
/// falls back to `http`; the authority comes from the standard host
/// resolution order (forwarded headers, then the `Host` header, then the
/// request target).
#[derive(Debug, Clone)]
pub struct BaseUrl(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BaseUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http")
            .to_string();

        let host = match Host::from_request_parts(parts, state).await {
            Ok(Host(host)) => host,
            Err(_) => "localhost".to_string(),
        };

        Ok(BaseUrl(format!("{}://{}", scheme, host)))
    }
}
