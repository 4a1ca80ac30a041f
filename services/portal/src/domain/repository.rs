#![allow(async_fn_in_trait)]

use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use crate::domain::types::{
    Assignment, Course, CourseSubmissionRow, CourseWithFaculty, Enrollment, MaterialItem,
    Notification, RosterEntry, StudentAssignment, StudentCourse, StudentMaterial, StudentProfile,
    Submission, SubmissionReview, User,
};
use crate::error::PortalServiceError;

/// Repository for user accounts and role-specific profile records.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, PortalServiceError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortalServiceError>;

    /// Insert a user together with its role-specific sub-records in one
    /// transaction: a student profile for students, course + assignment
    /// rows for faculty. Any failure rolls back all of them.
    async fn create(
        &self,
        user: &User,
        profile: Option<&StudentProfile>,
        courses: &[Course],
    ) -> Result<(), PortalServiceError>;
}

/// Repository for courses and the course-to-faculty relation.
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, PortalServiceError>;

    async fn create(&self, course: &Course) -> Result<(), PortalServiceError>;

    /// Every course with the names of its assigned faculty, ordered by
    /// course name.
    async fn list_with_faculty(&self) -> Result<Vec<CourseWithFaculty>, PortalServiceError>;

    /// Insert a (course, faculty) link. Duplicate pairs are rejected, not
    /// silently ignored.
    async fn assign_faculty(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<(), PortalServiceError>;

    async fn is_faculty_assigned(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<bool, PortalServiceError>;

    async fn list_for_faculty(&self, faculty_id: &str) -> Result<Vec<Course>, PortalServiceError>;

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentCourse>, PortalServiceError>;
}

/// Repository for the enrollment ledger.
pub trait EnrollmentRepository: Send + Sync {
    /// Insert an enrollment. The storage layer's unique index on
    /// (student, course) decides races; the loser gets `AlreadyEnrolled`.
    async fn create(&self, enrollment: &Enrollment) -> Result<(), PortalServiceError>;

    async fn exists(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<bool, PortalServiceError>;

    /// Ids of every student currently enrolled in the course. Used to
    /// compute fan-out recipients at event time.
    async fn student_ids_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<String>, PortalServiceError>;

    /// Roster with student and supervising-faculty names, ordered by
    /// student name.
    async fn roster_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<RosterEntry>, PortalServiceError>;
}

/// Repository for assignments and their per-student projections.
pub trait AssignmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, PortalServiceError>;

    /// Insert an assignment and its fan-out notifications atomically:
    /// either the assignment and every notification commit, or none do.
    async fn create_with_notifications(
        &self,
        assignment: &Assignment,
        notifications: &[Notification],
    ) -> Result<(), PortalServiceError>;

    /// Assignments across all of the student's enrolled courses with the
    /// student's own submission state, ordered by deadline ascending.
    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignment>, PortalServiceError>;
}

/// Repository for submissions and grading.
pub trait SubmissionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, PortalServiceError>;

    /// Insert a submission. The unique index on (assignment, student)
    /// decides races; the loser gets `AlreadySubmitted`.
    async fn create(&self, submission: &Submission) -> Result<(), PortalServiceError>;

    /// Overwrite grade and feedback. Re-grading is allowed.
    async fn set_grade(
        &self,
        id: Uuid,
        grade: i16,
        feedback: Option<&str>,
    ) -> Result<(), PortalServiceError>;

    /// Submissions for one assignment with student names, most recent
    /// submission first.
    async fn list_for_assignment(
        &self,
        assignment_id: Uuid,
    ) -> Result<Vec<SubmissionReview>, PortalServiceError>;

    /// Full-course summary: assignments LEFT JOIN submissions, ordered by
    /// deadline descending then student name ascending.
    async fn course_summary(
        &self,
        course_id: &str,
    ) -> Result<Vec<CourseSubmissionRow>, PortalServiceError>;
}

/// Repository for per-user notifications.
pub trait NotificationRepository: Send + Sync {
    async fn list_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Notification>, PortalServiceError>;

    /// Flip the read flag, guarded by ownership. Returns `false` when no
    /// row matches (unknown id or a different owner).
    async fn mark_read(&self, id: Uuid, user_id: &str) -> Result<bool, PortalServiceError>;
}

/// Repository for course materials.
pub trait MaterialRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MaterialItem>, PortalServiceError>;

    async fn create(&self, material: &MaterialItem) -> Result<(), PortalServiceError>;

    /// Materials across all of the student's enrolled courses, newest
    /// upload first.
    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentMaterial>, PortalServiceError>;
}

/// Port to the external blob store. The workflow persists only the
/// returned handle; byte storage, existence checks, and cleanup belong to
/// the collaborator behind this trait.
pub trait BlobStore: Send + Sync {
    async fn store(
        &self,
        prefix: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, PortalServiceError>;

    async fn retrieve(&self, handle: &str) -> Result<Vec<u8>, PortalServiceError>;
}
