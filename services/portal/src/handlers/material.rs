use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::CallerIdentity;
use campus_domain::role::UserRole;

use crate::domain::repository::BlobStore;
use crate::error::PortalServiceError;
use crate::handlers::assignment::CreatedResponse;
use crate::state::AppState;
use crate::usecase::material::{
    DownloadMaterialUseCase, ListMaterialsForStudentUseCase, PublishMaterialInput,
    PublishMaterialUseCase,
};

// ── POST /courses/{id}/materials ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PublishMaterialRequest {
    pub title: String,
    pub file_name: String,
    pub content: String,
}

pub async fn publish_material(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<PublishMaterialRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), PortalServiceError> {
    if identity.role != UserRole::Faculty {
        return Err(PortalServiceError::Forbidden);
    }
    let bytes = BASE64
        .decode(&body.content)
        .map_err(|_| PortalServiceError::MissingData)?;
    let file_id = state
        .blob
        .store("materials", &body.file_name, &bytes)
        .await?;
    let usecase = PublishMaterialUseCase {
        materials: state.material_repo(),
        courses: state.course_repo(),
    };
    let id = usecase
        .execute(PublishMaterialInput {
            course_id,
            faculty_id: identity.user_id,
            title: body.title,
            file_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_string() })))
}

// ── GET /users/@me/materials ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StudentMaterialResponse {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub file_id: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_my_materials(
    identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentMaterialResponse>>, PortalServiceError> {
    if identity.role != UserRole::Student {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = ListMaterialsForStudentUseCase {
        materials: state.material_repo(),
    };
    let materials = usecase.execute(&identity.user_id).await?;
    Ok(Json(
        materials
            .into_iter()
            .map(|m| StudentMaterialResponse {
                id: m.id.to_string(),
                course_id: m.course_id,
                course_name: m.course_name,
                title: m.title,
                file_id: m.file_id,
                uploaded_at: m.uploaded_at,
            })
            .collect(),
    ))
}

// ── GET /materials/{id}/file ─────────────────────────────────────────────────

pub async fn download_material(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, PortalServiceError> {
    if identity.role != UserRole::Student {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = DownloadMaterialUseCase {
        materials: state.material_repo(),
        enrollments: state.enrollment_repo(),
        blob: state.blob.clone(),
    };
    let download = usecase.execute(id, &identity.user_id).await?;
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download.title.replace('"', "")),
        )
        .body(Body::from(download.bytes))
        .map_err(anyhow::Error::new)?;
    Ok(response)
}
