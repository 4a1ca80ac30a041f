use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use campus_domain::grade::Grade;

use crate::domain::repository::{
    AssignmentRepository, CourseRepository, EnrollmentRepository, SubmissionRepository,
};
use crate::domain::types::{
    Assignment, CourseSubmissionRow, Notification, StudentAssignment, Submission,
    SubmissionReview,
};
use crate::error::PortalServiceError;

/// Message delivered to each enrolled student when an assignment is
/// published.
fn assignment_notice(title: &str, course_name: &str, deadline: NaiveDate) -> String {
    format!("New assignment '{title}' has been uploaded for {course_name}. Deadline: {deadline}")
}

// ── CreateAssignment ─────────────────────────────────────────────────────────

pub struct CreateAssignmentInput {
    pub course_id: String,
    pub faculty_id: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub file_id: Option<String>,
}

pub struct CreateAssignmentUseCase<A, C, E>
where
    A: AssignmentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub assignments: A,
    pub courses: C,
    pub enrollments: E,
}

impl<A, C, E> CreateAssignmentUseCase<A, C, E>
where
    A: AssignmentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub async fn execute(&self, input: CreateAssignmentInput) -> Result<Uuid, PortalServiceError> {
        if input.title.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        let course = self
            .courses
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

        let now = Utc::now();
        let assignment = Assignment {
            id: Uuid::now_v7(),
            course_id: input.course_id,
            title: input.title,
            description: input.description,
            deadline: input.deadline,
            file_id: input.file_id,
            created_at: now,
        };

        // Recipients are the students enrolled right now. Later enrollees
        // get nothing retroactively.
        let recipients = self
            .enrollments
            .student_ids_for_course(&assignment.course_id)
            .await?;
        let message = assignment_notice(&assignment.title, &course.name, assignment.deadline);
        let notifications: Vec<Notification> = recipients
            .into_iter()
            .map(|student_id| Notification {
                id: Uuid::now_v7(),
                user_id: student_id,
                message: message.clone(),
                is_read: false,
                created_at: now,
            })
            .collect();

        self.assignments
            .create_with_notifications(&assignment, &notifications)
            .await?;
        Ok(assignment.id)
    }
}

// ── SubmitAssignment ─────────────────────────────────────────────────────────

pub struct SubmitAssignmentInput {
    pub assignment_id: Uuid,
    pub student_id: String,
    pub file_id: String,
}

pub struct SubmitAssignmentUseCase<A, S, E>
where
    A: AssignmentRepository,
    S: SubmissionRepository,
    E: EnrollmentRepository,
{
    pub assignments: A,
    pub submissions: S,
    pub enrollments: E,
}

impl<A, S, E> SubmitAssignmentUseCase<A, S, E>
where
    A: AssignmentRepository,
    S: SubmissionRepository,
    E: EnrollmentRepository,
{
    pub async fn execute(&self, input: SubmitAssignmentInput) -> Result<Uuid, PortalServiceError> {
        let assignment = self
            .assignments
            .find_by_id(input.assignment_id)
            .await?
            .ok_or(PortalServiceError::AssignmentNotFound)?;
        if !self
            .enrollments
            .exists(&input.student_id, &assignment.course_id)
            .await?
        {
            return Err(PortalServiceError::NotEnrolled);
        }

        let submission = Submission {
            id: Uuid::now_v7(),
            assignment_id: input.assignment_id,
            student_id: input.student_id,
            file_id: input.file_id,
            submitted_at: Utc::now(),
            grade: None,
            feedback: None,
        };
        // One submission per (assignment, student); the unique index
        // rejects a second attempt, there is no replace.
        self.submissions.create(&submission).await?;
        Ok(submission.id)
    }
}

// ── GradeSubmission ──────────────────────────────────────────────────────────

pub struct GradeSubmissionInput {
    pub submission_id: Uuid,
    pub faculty_id: String,
    pub grade: i16,
    pub feedback: Option<String>,
}

pub struct GradeSubmissionUseCase<S, A, C>
where
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
{
    pub submissions: S,
    pub assignments: A,
    pub courses: C,
}

impl<S, A, C> GradeSubmissionUseCase<S, A, C>
where
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
{
    pub async fn execute(&self, input: GradeSubmissionInput) -> Result<(), PortalServiceError> {
        let grade = Grade::new(input.grade).ok_or(PortalServiceError::GradeOutOfRange)?;
        let submission = self
            .submissions
            .find_by_id(input.submission_id)
            .await?
            .ok_or(PortalServiceError::SubmissionNotFound)?;
        let assignment = self
            .assignments
            .find_by_id(submission.assignment_id)
            .await?
            .ok_or(PortalServiceError::AssignmentNotFound)?;
        if !self
            .courses
            .is_faculty_assigned(&assignment.course_id, &input.faculty_id)
            .await?
        {
            return Err(PortalServiceError::FacultyNotAssigned);
        }

        // Overwrites any earlier grade; re-grading is a plain update.
        self.submissions
            .set_grade(input.submission_id, grade.value(), input.feedback.as_deref())
            .await
    }
}

// ── ListAssignmentsForStudent ────────────────────────────────────────────────

pub struct ListAssignmentsForStudentUseCase<A: AssignmentRepository> {
    pub assignments: A,
}

impl<A: AssignmentRepository> ListAssignmentsForStudentUseCase<A> {
    pub async fn execute(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignment>, PortalServiceError> {
        self.assignments.list_for_student(student_id).await
    }
}

// ── ListSubmissionsForAssignment ─────────────────────────────────────────────

pub struct ListSubmissionsForAssignmentUseCase<S, A, C>
where
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
{
    pub submissions: S,
    pub assignments: A,
    pub courses: C,
}

impl<S, A, C> ListSubmissionsForAssignmentUseCase<S, A, C>
where
    S: SubmissionRepository,
    A: AssignmentRepository,
    C: CourseRepository,
{
    pub async fn execute(
        &self,
        assignment_id: Uuid,
        faculty_id: &str,
    ) -> Result<Vec<SubmissionReview>, PortalServiceError> {
        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or(PortalServiceError::AssignmentNotFound)?;
        if !self
            .courses
            .is_faculty_assigned(&assignment.course_id, faculty_id)
            .await?
        {
            return Err(PortalServiceError::FacultyNotAssigned);
        }
        self.submissions.list_for_assignment(assignment_id).await
    }
}

// ── CourseSubmissionSummary ──────────────────────────────────────────────────

pub struct CourseSubmissionSummaryUseCase<S, C>
where
    S: SubmissionRepository,
    C: CourseRepository,
{
    pub submissions: S,
    pub courses: C,
}

impl<S, C> CourseSubmissionSummaryUseCase<S, C>
where
    S: SubmissionRepository,
    C: CourseRepository,
{
    pub async fn execute(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<Vec<CourseSubmissionRow>, PortalServiceError> {
        if !self.courses.is_faculty_assigned(course_id, faculty_id).await? {
            return Err(PortalServiceError::FacultyNotAssigned);
        }
        self.submissions.course_summary(course_id).await
    }
}
