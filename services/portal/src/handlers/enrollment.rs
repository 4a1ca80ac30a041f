use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use campus_core::identity::CallerIdentity;
use campus_domain::role::UserRole;

use crate::domain::repository::EnrollmentRepository;
use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::enrollment::{CourseRosterUseCase, EnrollStudentInput, EnrollStudentUseCase};

// ── POST /enrollments ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EnrollStudentRequest {
    pub course_id: String,
    pub student_id: String,
    /// Supervising faculty. Admins must name one; faculty callers enroll
    /// under their own id and may omit it.
    pub faculty_id: Option<String>,
}

pub async fn enroll_student(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Json(body): Json<EnrollStudentRequest>,
) -> Result<StatusCode, PortalServiceError> {
    let faculty_id = match identity.role {
        UserRole::Admin => body.faculty_id.ok_or(PortalServiceError::MissingData)?,
        UserRole::Faculty => identity.user_id,
        UserRole::Student => return Err(PortalServiceError::Forbidden),
    };
    let usecase = EnrollStudentUseCase {
        enrollments: state.enrollment_repo(),
        courses: state.course_repo(),
        users: state.user_repo(),
    };
    usecase
        .execute(EnrollStudentInput {
            course_id: body.course_id,
            student_id: body.student_id,
            faculty_id,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── GET /courses/{id}/roster ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RosterEntryResponse {
    pub student_id: String,
    pub student_name: String,
    pub semester: i16,
    pub branch: String,
    pub section: String,
    pub faculty_id: String,
    pub faculty_name: String,
}

pub async fn get_roster(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<RosterEntryResponse>>, PortalServiceError> {
    if identity.role == UserRole::Student {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = CourseRosterUseCase {
        enrollments: state.enrollment_repo(),
        courses: state.course_repo(),
    };
    let roster = match identity.role {
        // Admins see any roster without an assignment check.
        UserRole::Admin => {
            usecase
                .enrollments
                .roster_for_course(&course_id)
                .await?
        }
        _ => usecase.execute(&course_id, &identity.user_id).await?,
    };
    Ok(Json(
        roster
            .into_iter()
            .map(|r| RosterEntryResponse {
                student_id: r.student_id,
                student_name: r.student_name,
                semester: r.semester,
                branch: r.branch,
                section: r.section,
                faculty_id: r.faculty_id,
                faculty_name: r.faculty_name,
            })
            .collect(),
    ))
}
