use axum::{Json, extract::Query, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use campus_core::identity::CallerIdentity;
use campus_domain::pagination::PageRequest;
use campus_domain::role::UserRole;

use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    FacultyCourseInput, GetUserUseCase, ListUsersUseCase, RegisterUserInput, RegisterUserUseCase,
    StudentProfileInput,
};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StudentProfileRequest {
    pub semester: i16,
    pub branch: String,
    pub section: String,
}

#[derive(Deserialize)]
pub struct FacultyCourseRequest {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<u8>,
    pub profile: Option<StudentProfileRequest>,
    #[serde(default)]
    pub courses: Vec<FacultyCourseRequest>,
}

pub async fn register_user(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<StatusCode, PortalServiceError> {
    if identity.role != UserRole::Admin {
        return Err(PortalServiceError::Forbidden);
    }
    let role = UserRole::from_u8(body.role.unwrap_or(0)).ok_or(PortalServiceError::MissingData)?;
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(RegisterUserInput {
            id: body.id,
            name: body.name,
            email: body.email,
            password: body.password,
            role,
            profile: body.profile.map(|p| StudentProfileInput {
                semester: p.semester,
                branch: p.branch,
                section: p.section,
            }),
            courses: body
                .courses
                .into_iter()
                .map(|c| FacultyCourseInput {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: u8,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn list_users(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, PortalServiceError> {
    if identity.role != UserRole::Admin {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute(page).await?;
    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                name: u.name,
                email: u.email,
                role: u.role.as_u8(),
                created_at: u.created_at,
            })
            .collect(),
    ))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, PortalServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&identity.user_id).await?;
    Ok(Json(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.as_u8(),
        created_at: user.created_at,
    }))
}
