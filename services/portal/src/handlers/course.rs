use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use campus_core::identity::CallerIdentity;
use campus_domain::role::UserRole;

use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::course::{
    AssignFacultyUseCase, CreateCourseInput, CreateCourseUseCase, ListCoursesForFacultyUseCase,
    ListCoursesForStudentUseCase, ListCoursesWithFacultyUseCase,
};

// ── POST /courses ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub id: String,
    pub name: String,
}

pub async fn create_course(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<StatusCode, PortalServiceError> {
    if identity.role != UserRole::Admin {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = CreateCourseUseCase {
        courses: state.course_repo(),
    };
    usecase
        .execute(CreateCourseInput {
            id: body.id,
            name: body.name,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── GET /courses ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseWithFacultyResponse {
    pub id: String,
    pub name: String,
    pub faculty_names: Vec<String>,
}

pub async fn get_courses(
    _identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithFacultyResponse>>, PortalServiceError> {
    let usecase = ListCoursesWithFacultyUseCase {
        courses: state.course_repo(),
    };
    let courses = usecase.execute().await?;
    Ok(Json(
        courses
            .into_iter()
            .map(|c| CourseWithFacultyResponse {
                id: c.id,
                name: c.name,
                faculty_names: c.faculty_names,
            })
            .collect(),
    ))
}

// ── POST /courses/{id}/faculty ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AssignFacultyRequest {
    pub faculty_id: String,
}

pub async fn assign_faculty(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<AssignFacultyRequest>,
) -> Result<StatusCode, PortalServiceError> {
    if identity.role != UserRole::Admin {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = AssignFacultyUseCase {
        courses: state.course_repo(),
        users: state.user_repo(),
    };
    usecase.execute(&course_id, &body.faculty_id).await?;
    Ok(StatusCode::CREATED)
}

// ── GET /users/@me/courses ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OwnCourseResponse {
    pub course_id: String,
    pub course_name: String,
    /// Supervising faculty for students; absent for faculty's own listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

pub async fn get_my_courses(
    identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnCourseResponse>>, PortalServiceError> {
    let courses = match identity.role {
        UserRole::Student => {
            let usecase = ListCoursesForStudentUseCase {
                courses: state.course_repo(),
            };
            usecase
                .execute(&identity.user_id)
                .await?
                .into_iter()
                .map(|c| OwnCourseResponse {
                    course_id: c.course_id,
                    course_name: c.course_name,
                    faculty_name: Some(c.faculty_name),
                })
                .collect()
        }
        UserRole::Faculty => {
            let usecase = ListCoursesForFacultyUseCase {
                courses: state.course_repo(),
            };
            usecase
                .execute(&identity.user_id)
                .await?
                .into_iter()
                .map(|c| OwnCourseResponse {
                    course_id: c.id,
                    course_name: c.name,
                    faculty_name: None,
                })
                .collect()
        }
        UserRole::Admin => return Err(PortalServiceError::Forbidden),
    };
    Ok(Json(courses))
}
