use chrono::Utc;
use uuid::Uuid;

use campus_domain::role::UserRole;

use crate::domain::repository::{CourseRepository, EnrollmentRepository, UserRepository};
use crate::domain::types::{Enrollment, RosterEntry};
use crate::error::PortalServiceError;

// ── EnrollStudent ────────────────────────────────────────────────────────────

pub struct EnrollStudentInput {
    pub course_id: String,
    pub student_id: String,
    /// The enrolling faculty member; recorded on the ledger row as the
    /// student's supervisor for this course.
    pub faculty_id: String,
}

pub struct EnrollStudentUseCase<E, C, U>
where
    E: EnrollmentRepository,
    C: CourseRepository,
    U: UserRepository,
{
    pub enrollments: E,
    pub courses: C,
    pub users: U,
}

impl<E, C, U> EnrollStudentUseCase<E, C, U>
where
    E: EnrollmentRepository,
    C: CourseRepository,
    U: UserRepository,
{
    pub async fn execute(&self, input: EnrollStudentInput) -> Result<(), PortalServiceError> {
        self.courses
            .find_by_id(&input.course_id)
            .await?
            .ok_or(PortalServiceError::CourseNotFound)?;
        if !self
            .courses
            .is_faculty_assigned(&input.course_id, &input.faculty_id)
            .await?
        {
            return Err(PortalServiceError::FacultyNotAssigned);
        }
        let student = self
            .users
            .find_by_id(&input.student_id)
            .await?
            .ok_or(PortalServiceError::UserNotFound)?;
        if student.role != UserRole::Student {
            return Err(PortalServiceError::Forbidden);
        }

        // The unique index on (student, course) is the arbiter for
        // concurrent enrolls; whoever loses gets AlreadyEnrolled here.
        self.enrollments
            .create(&Enrollment {
                id: Uuid::now_v7(),
                student_id: input.student_id,
                course_id: input.course_id,
                faculty_id: input.faculty_id,
                created_at: Utc::now(),
            })
            .await
    }
}

// ── CourseRoster ─────────────────────────────────────────────────────────────

pub struct CourseRosterUseCase<E, C>
where
    E: EnrollmentRepository,
    C: CourseRepository,
{
    pub enrollments: E,
    pub courses: C,
}

impl<E, C> CourseRosterUseCase<E, C>
where
    E: EnrollmentRepository,
    C: CourseRepository,
{
    pub async fn execute(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<Vec<RosterEntry>, PortalServiceError> {
        if !self.courses.is_faculty_assigned(course_id, faculty_id).await? {
            return Err(PortalServiceError::FacultyNotAssigned);
        }
        self.enrollments.roster_for_course(course_id).await
    }
}
