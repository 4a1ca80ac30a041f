//! Student profile value checks.

/// First semester of a programme.
pub const SEMESTER_MIN: i16 = 1;
/// Last semester of a programme.
pub const SEMESTER_MAX: i16 = 8;

/// A semester is valid when it falls within `1..=8`.
pub fn valid_semester(semester: i16) -> bool {
    (SEMESTER_MIN..=SEMESTER_MAX).contains(&semester)
}
