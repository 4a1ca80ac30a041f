//! Grade value type.

use serde::{Deserialize, Serialize};

/// Inclusive lower bound of a grade.
pub const GRADE_MIN: i16 = 0;
/// Inclusive upper bound of a grade.
pub const GRADE_MAX: i16 = 10;

/// A submission grade, bounded to `0..=10`.
///
/// Construct with [`Grade::new`]; out-of-range values are rejected, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(i16);

impl Grade {
    /// Returns `None` when `value` is outside `0..=10`.
    pub fn new(value: i16) -> Option<Self> {
        (GRADE_MIN..=GRADE_MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}
