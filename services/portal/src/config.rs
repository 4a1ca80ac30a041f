/// Portal service configuration loaded from environment variables.
#[derive(Debug)]
pub struct PortalConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3131). Env var: `PORTAL_PORT`.
    pub portal_port: u16,
    /// Directory for uploaded files (default "./data/blobs"). Env var: `PORTAL_BLOB_ROOT`.
    pub blob_root: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            portal_port: std::env::var("PORTAL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3131),
            blob_root: std::env::var("PORTAL_BLOB_ROOT")
                .unwrap_or_else(|_| "./data/blobs".to_owned()),
        }
    }
}
