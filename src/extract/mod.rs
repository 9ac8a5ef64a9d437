//! Request extractors.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Name of the identity header.
pub const USER_HEADER: &str = "user";

/// The caller's participant name, taken from the `user` request header.
///
/// Extraction never rejects: the value is `None` when the header is absent
/// or not valid UTF-8, and each handler decides what a missing identity
/// means for its endpoint (422 for sending, 404 for status, "anonymous
/// reader" for listing).
#[derive(Clone, Debug)]
pub struct UserHeader(pub Option<String>);

impl<S> FromRequestParts<S> for UserHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Option<String> {
        let (mut parts, ()) = request.into_parts();
        let UserHeader(user) = UserHeader::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        user
    }

    #[tokio::test]
    async fn reads_the_user_header() {
        let request = Request::builder()
            .uri("/messages")
            .header("user", "Ana")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await, Some("Ana".to_string()));
    }

    #[tokio::test]
    async fn missing_header_extracts_as_none() {
        let request = Request::builder().uri("/messages").body(()).unwrap();

        assert_eq!(extract(request).await, None);
    }
}
