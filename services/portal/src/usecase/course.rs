use campus_domain::role::UserRole;

use crate::domain::repository::{CourseRepository, UserRepository};
use crate::domain::types::{Course, CourseWithFaculty, StudentCourse};
use crate::error::PortalServiceError;

// ── CreateCourse ─────────────────────────────────────────────────────────────

pub struct CreateCourseInput {
    pub id: String,
    pub name: String,
}

pub struct CreateCourseUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> CreateCourseUseCase<C> {
    pub async fn execute(&self, input: CreateCourseInput) -> Result<(), PortalServiceError> {
        if input.id.is_empty() || input.name.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        self.courses
            .create(&Course {
                id: input.id,
                name: input.name,
            })
            .await
    }
}

// ── AssignFaculty ────────────────────────────────────────────────────────────

pub struct AssignFacultyUseCase<C: CourseRepository, U: UserRepository> {
    pub courses: C,
    pub users: U,
}

impl<C: CourseRepository, U: UserRepository> AssignFacultyUseCase<C, U> {
    pub async fn execute(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<(), PortalServiceError> {
        let user = self
            .users
            .find_by_id(faculty_id)
            .await?
            .ok_or(PortalServiceError::UserNotFound)?;
        if user.role != UserRole::Faculty {
            return Err(PortalServiceError::Forbidden);
        }
        self.courses.assign_faculty(course_id, faculty_id).await
    }
}

// ── ListCoursesWithFaculty ───────────────────────────────────────────────────

pub struct ListCoursesWithFacultyUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListCoursesWithFacultyUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<CourseWithFaculty>, PortalServiceError> {
        self.courses.list_with_faculty().await
    }
}

// ── ListCoursesForFaculty ────────────────────────────────────────────────────

pub struct ListCoursesForFacultyUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListCoursesForFacultyUseCase<C> {
    pub async fn execute(&self, faculty_id: &str) -> Result<Vec<Course>, PortalServiceError> {
        self.courses.list_for_faculty(faculty_id).await
    }
}

// ── ListCoursesForStudent ────────────────────────────────────────────────────

pub struct ListCoursesForStudentUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListCoursesForStudentUseCase<C> {
    pub async fn execute(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentCourse>, PortalServiceError> {
        self.courses.list_for_student(student_id).await
    }
}
