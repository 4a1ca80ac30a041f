use axum::http::StatusCode;

/// `GET /healthz` — process liveness. Always 200 while the server loop
/// is running.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness. The portal serves traffic as soon as it
/// binds, so this mirrors liveness; swap in a dependency check when a
/// service grows one.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
