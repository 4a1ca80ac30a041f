//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints.
///
/// - `per_page`: 1–50, default 20
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to 1–50 and `page` to ≥ 1. Call after
    /// deserializing query params, before building a query.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 50),
            page: self.page.max(1),
        }
    }

    /// Row offset of the first item on this page. Widened before the
    /// multiply so an arbitrary `page` from a query string cannot
    /// overflow, and safe to call on an unclamped `page == 0`.
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Maximum number of rows on this page.
    pub fn limit(self) -> u64 {
        u64::from(self.per_page)
    }
}
