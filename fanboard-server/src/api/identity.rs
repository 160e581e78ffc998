//! Per-request identity resolution
//!
//! Authentication itself is external: a front proxy or identity provider
//! validates the session and writes the resolved user id into a request
//! header (configurable, default `x-user-id`). This module only extracts
//! that id. Because `EventSource` cannot set request headers, the `user`
//! query parameter is accepted as a fallback for the SSE connection.

use crate::api::ApiError;
use crate::AppState;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use fanboard_common::Error;
use serde::Deserialize;

/// Identity of the requesting user, resolved from the external auth context
#[derive(Debug, Clone)]
pub struct Identity(pub String);

/// Query-string fallback, `?user=<id>`
#[derive(Debug, Deserialize)]
struct UserQuery {
    user: Option<String>,
}

#[async_trait]
impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(&state.identity_header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let identity = from_header.or_else(|| user_query_param(&parts.uri));

        identity.map(Identity).ok_or_else(|| Error::Unauthorized.into())
    }
}

/// Pull `user=<id>` out of the query string, if present and non-empty.
///
/// Both identity paths must resolve the same user, so this goes through
/// `Query`, which percent-decodes; the header carries the raw id.
fn user_query_param(uri: &Uri) -> Option<String> {
    Query::<UserQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(query)| query.user)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(path_and_query: &str) -> Uri {
        path_and_query.parse().unwrap()
    }

    #[test]
    fn query_param_extraction() {
        assert_eq!(
            user_query_param(&uri("/api/artists?user=alice&x=1")),
            Some("alice".to_string())
        );
        assert_eq!(user_query_param(&uri("/api/artists?x=1")), None);
        assert_eq!(user_query_param(&uri("/api/artists?user=")), None);
        assert_eq!(user_query_param(&uri("/api/artists")), None);
    }

    #[test]
    fn query_param_is_percent_decoded() {
        // Must match what the same id looks like on the header path
        assert_eq!(
            user_query_param(&uri("/api/artists?user=alice%20bob")),
            Some("alice bob".to_string())
        );
        assert_eq!(
            user_query_param(&uri("/api/artists?user=50%25off")),
            Some("50%off".to_string())
        );
    }
}
