//! Gateway-injected caller identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use campus_domain::role::UserRole;

/// Caller identity injected by the gateway via `x-campus-user-id` and
/// `x-campus-user-role` headers. The user id is the externally assigned
/// code (roll number or staff code), not a generated identifier.
///
/// Returns 401 if either header is absent, the id is empty, or the role
/// is not a known wire value. Role enforcement (403) is done by handlers
/// after extraction.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: String,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-campus-user-id")
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        let role = parts
            .headers
            .get("x-campus-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(UserRole::from_u8);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let role = role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, role })
        }
    }
}
