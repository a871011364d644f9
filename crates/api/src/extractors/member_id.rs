//! Member id path extractor.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use shared::validation::{coerce_member_id, is_valid_member_id};

/// Name of the path segment carrying the member id.
pub const MEMBER_ID_PARAM: &str = "member_id";

/// Member id taken from the `:member_id` path segment.
///
/// Never rejects: a missing, undecodable, non-numeric, or negative segment
/// becomes `0`, which handlers treat as "no such member".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberIdParam(pub i64);

impl MemberIdParam {
    pub fn is_valid(&self) -> bool {
        is_valid_member_id(self.0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MemberIdParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(mut params)| params.remove(MEMBER_ID_PARAM))
            .unwrap_or_default();

        Ok(MemberIdParam(coerce_member_id(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn echo(MemberIdParam(id): MemberIdParam) -> String {
        id.to_string()
    }

    async fn extract(uri: &str) -> String {
        let app = Router::new().route("/:member_id/check", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_numeric_member_id() {
        assert_eq!(extract("/42/check").await, "42");
    }

    #[tokio::test]
    async fn test_non_numeric_member_id_is_zero() {
        assert_eq!(extract("/abc/check").await, "0");
    }

    #[tokio::test]
    async fn test_percent_encoded_whitespace_is_trimmed() {
        assert_eq!(extract("/%207%20/check").await, "7");
    }

    #[tokio::test]
    async fn test_negative_member_id_is_zero() {
        assert_eq!(extract("/-5/check").await, "0");
    }

    #[tokio::test]
    async fn test_missing_param_is_zero() {
        let app = Router::new().route("/check", get(echo));
        let response = app
            .oneshot(Request::builder().uri("/check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"0");
    }

    #[test]
    fn test_is_valid() {
        assert!(MemberIdParam(1).is_valid());
        assert!(!MemberIdParam(0).is_valid());
    }
}
