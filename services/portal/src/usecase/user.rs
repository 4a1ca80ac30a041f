use chrono::Utc;
use sha2::{Digest, Sha256};

use campus_domain::pagination::PageRequest;
use campus_domain::profile::valid_semester;
use campus_domain::role::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{Course, StudentProfile, User};
use crate::error::PortalServiceError;

/// Lowercase hex SHA-256 of the password. Stored instead of the plain
/// text; login compares digests.
pub fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct StudentProfileInput {
    pub semester: i16,
    pub branch: String,
    pub section: String,
}

pub struct FacultyCourseInput {
    pub id: String,
    pub name: String,
}

pub struct RegisterUserInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// Required when role is Student, rejected otherwise.
    pub profile: Option<StudentProfileInput>,
    /// Courses taught, for faculty registration. Created together with the
    /// account and linked to it.
    pub courses: Vec<FacultyCourseInput>,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<(), PortalServiceError> {
        if input.id.is_empty() || input.name.is_empty() || input.password.is_empty() {
            return Err(PortalServiceError::MissingData);
        }

        let profile = match (input.role, input.profile) {
            (UserRole::Student, Some(p)) => {
                if !valid_semester(p.semester) {
                    return Err(PortalServiceError::InvalidSemester);
                }
                Some(StudentProfile {
                    user_id: input.id.clone(),
                    semester: p.semester,
                    branch: p.branch,
                    section: p.section,
                })
            }
            (UserRole::Student, None) => return Err(PortalServiceError::MissingData),
            (_, Some(_)) => return Err(PortalServiceError::MissingData),
            (_, None) => None,
        };

        if !input.courses.is_empty() && input.role != UserRole::Faculty {
            return Err(PortalServiceError::MissingData);
        }
        let courses: Vec<Course> = input
            .courses
            .into_iter()
            .map(|c| Course {
                id: c.id,
                name: c.name,
            })
            .collect();
        if courses.iter().any(|c| c.id.is_empty() || c.name.is_empty()) {
            return Err(PortalServiceError::MissingData);
        }

        let user = User {
            id: input.id,
            name: input.name,
            email: input.email,
            role: input.role,
            password_digest: password_digest(&input.password),
            created_at: Utc::now(),
        };
        self.repo.create(&user, profile.as_ref(), &courses).await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<User, PortalServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(PortalServiceError::UserNotFound)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, PortalServiceError> {
        self.repo.list(page.clamped()).await
    }
}
