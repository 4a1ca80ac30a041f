//! User role types.

use serde::{Deserialize, Serialize};

/// Account role, fixed at registration.
///
/// Wire format: `u8` (0 = Student, 1 = Faculty, 2 = Admin). The numeric
/// value doubles as the database column value (stored as `i16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student = 0,
    Faculty = 1,
    Admin = 2,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Student),
            1 => Some(Self::Faculty),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert from the `i16` database column value.
    pub fn from_i16(v: i16) -> Option<Self> {
        u8::try_from(v).ok().and_then(Self::from_u8)
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert to the `i16` database column value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}
