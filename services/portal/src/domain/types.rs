use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use campus_domain::role::UserRole;

/// User account. The id is externally assigned (roll number or staff
/// code) and immutable; the role is fixed at registration.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// Profile owned 1:1 by a student user.
#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub user_id: String,
    pub semester: i16,
    pub branch: String,
    pub section: String,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: String,
    pub name: String,
}

/// A course together with the names of its assigned faculty.
#[derive(Debug, Clone)]
pub struct CourseWithFaculty {
    pub id: String,
    pub name: String,
    pub faculty_names: Vec<String>,
}

/// A course as seen from a student's ledger: includes the supervising
/// faculty member recorded at enrollment time.
#[derive(Debug, Clone)]
pub struct StudentCourse {
    pub course_id: String,
    pub course_name: String,
    pub faculty_name: String,
}

/// Student-to-course-to-supervising-faculty triple. The (student, course)
/// pair is unique; the faculty member is fixed at creation.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: String,
    pub course_id: String,
    pub faculty_id: String,
    pub created_at: DateTime<Utc>,
}

/// One row of a course roster, ordered by student name for display.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub student_id: String,
    pub student_name: String,
    pub semester: i16,
    pub branch: String,
    pub section: String,
    pub faculty_id: String,
    pub faculty_name: String,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: Uuid,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub file_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-(assignment, student) workflow state. There is no transition back
/// to `NotSubmitted`; `Graded` is reached once a grade is non-null, with
/// or without feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    NotSubmitted,
    Submitted,
    Graded,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSubmitted => "not_submitted",
            Self::Submitted => "submitted",
            Self::Graded => "graded",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: String,
    pub file_id: String,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        if self.grade.is_some() {
            SubmissionStatus::Graded
        } else {
            SubmissionStatus::Submitted
        }
    }
}

/// An assignment as seen by one student, with that student's own
/// submission state folded in.
#[derive(Debug, Clone)]
pub struct StudentAssignment {
    pub id: Uuid,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub file_id: Option<String>,
    pub status: SubmissionStatus,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

/// One submission in a grading-review listing, with the student's name.
#[derive(Debug, Clone)]
pub struct SubmissionReview {
    pub id: Uuid,
    pub student_id: String,
    pub student_name: String,
    pub file_id: String,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

/// One row of the full-course submission summary: every assignment of the
/// course, LEFT-joined with submissions, ordered by deadline descending
/// then student name ascending.
#[derive(Debug, Clone)]
pub struct CourseSubmissionRow {
    pub assignment_title: String,
    pub deadline: NaiveDate,
    pub student_name: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

/// Notification delivered to one recipient. Created only by the workflow
/// fan-out, mutated only to flip the read flag.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MaterialItem {
    pub id: Uuid,
    pub course_id: String,
    pub title: String,
    pub file_id: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A material as seen from a student's ledger, with the course name.
#[derive(Debug, Clone)]
pub struct StudentMaterial {
    pub id: Uuid,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub file_id: String,
    pub uploaded_at: DateTime<Utc>,
}
