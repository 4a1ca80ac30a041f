use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_core::identity::CallerIdentity;
use campus_domain::role::UserRole;

use crate::domain::repository::BlobStore;
use crate::error::PortalServiceError;
use crate::state::AppState;
use crate::usecase::assignment::{
    CourseSubmissionSummaryUseCase, CreateAssignmentInput, CreateAssignmentUseCase,
    GradeSubmissionInput, GradeSubmissionUseCase, ListAssignmentsForStudentUseCase,
    ListSubmissionsForAssignmentUseCase, SubmitAssignmentInput, SubmitAssignmentUseCase,
};

/// Base64-encoded upload attached to a request body.
#[derive(Deserialize)]
pub struct FilePayload {
    pub file_name: String,
    pub content: String,
}

impl FilePayload {
    fn decode(&self) -> Result<Vec<u8>, PortalServiceError> {
        BASE64
            .decode(&self.content)
            .map_err(|_| PortalServiceError::MissingData)
    }
}

// ── POST /courses/{id}/assignments ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: NaiveDate,
    pub file: Option<FilePayload>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

pub async fn create_assignment(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), PortalServiceError> {
    if identity.role != UserRole::Faculty {
        return Err(PortalServiceError::Forbidden);
    }
    let file_id = match &body.file {
        Some(file) => {
            let bytes = file.decode()?;
            Some(state.blob.store("assignments", &file.file_name, &bytes).await?)
        }
        None => None,
    };
    let usecase = CreateAssignmentUseCase {
        assignments: state.assignment_repo(),
        courses: state.course_repo(),
        enrollments: state.enrollment_repo(),
    };
    let id = usecase
        .execute(CreateAssignmentInput {
            course_id,
            faculty_id: identity.user_id,
            title: body.title,
            description: body.description,
            deadline: body.deadline,
            file_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_string() })))
}

// ── GET /users/@me/assignments ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct StudentAssignmentResponse {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub file_id: Option<String>,
    pub status: &'static str,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

pub async fn get_my_assignments(
    identity: CallerIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentAssignmentResponse>>, PortalServiceError> {
    if identity.role != UserRole::Student {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = ListAssignmentsForStudentUseCase {
        assignments: state.assignment_repo(),
    };
    let assignments = usecase.execute(&identity.user_id).await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(|a| StudentAssignmentResponse {
                id: a.id.to_string(),
                course_id: a.course_id,
                course_name: a.course_name,
                title: a.title,
                description: a.description,
                deadline: a.deadline,
                file_id: a.file_id,
                status: a.status.as_str(),
                grade: a.grade,
                feedback: a.feedback,
            })
            .collect(),
    ))
}

// ── POST /assignments/{id}/submissions ───────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitAssignmentRequest {
    pub file: FilePayload,
}

pub async fn submit_assignment(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
    Json(body): Json<SubmitAssignmentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), PortalServiceError> {
    if identity.role != UserRole::Student {
        return Err(PortalServiceError::Forbidden);
    }
    let bytes = body.file.decode()?;
    let file_id = state
        .blob
        .store("submissions", &body.file.file_name, &bytes)
        .await?;
    let usecase = SubmitAssignmentUseCase {
        assignments: state.assignment_repo(),
        submissions: state.submission_repo(),
        enrollments: state.enrollment_repo(),
    };
    let id = usecase
        .execute(SubmitAssignmentInput {
            assignment_id,
            student_id: identity.user_id,
            file_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_string() })))
}

// ── GET /assignments/{id}/submissions ────────────────────────────────────────

#[derive(Serialize)]
pub struct SubmissionReviewResponse {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub file_id: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

pub async fn get_submissions(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
) -> Result<Json<Vec<SubmissionReviewResponse>>, PortalServiceError> {
    if identity.role != UserRole::Faculty {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = ListSubmissionsForAssignmentUseCase {
        submissions: state.submission_repo(),
        assignments: state.assignment_repo(),
        courses: state.course_repo(),
    };
    let submissions = usecase.execute(assignment_id, &identity.user_id).await?;
    Ok(Json(
        submissions
            .into_iter()
            .map(|s| SubmissionReviewResponse {
                id: s.id.to_string(),
                student_id: s.student_id,
                student_name: s.student_name,
                file_id: s.file_id,
                submitted_at: s.submitted_at,
                grade: s.grade,
                feedback: s.feedback,
            })
            .collect(),
    ))
}

// ── GET /courses/{id}/submissions ────────────────────────────────────────────

#[derive(Serialize)]
pub struct CourseSubmissionRowResponse {
    pub assignment_title: String,
    pub deadline: NaiveDate,
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    pub grade: Option<i16>,
    pub feedback: Option<String>,
}

pub async fn get_course_submissions(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<CourseSubmissionRowResponse>>, PortalServiceError> {
    if identity.role != UserRole::Faculty {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = CourseSubmissionSummaryUseCase {
        submissions: state.submission_repo(),
        courses: state.course_repo(),
    };
    let rows = usecase.execute(&course_id, &identity.user_id).await?;
    Ok(Json(
        rows.into_iter()
            .map(|r| CourseSubmissionRowResponse {
                assignment_title: r.assignment_title,
                deadline: r.deadline,
                student_name: r.student_name,
                submitted_at: r
                    .submitted_at
                    .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
                grade: r.grade,
                feedback: r.feedback,
            })
            .collect(),
    ))
}

// ── PATCH /submissions/{id}/grade ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GradeSubmissionRequest {
    pub grade: i16,
    pub feedback: Option<String>,
}

pub async fn grade_submission(
    identity: CallerIdentity,
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
    Json(body): Json<GradeSubmissionRequest>,
) -> Result<StatusCode, PortalServiceError> {
    if identity.role != UserRole::Faculty {
        return Err(PortalServiceError::Forbidden);
    }
    let usecase = GradeSubmissionUseCase {
        submissions: state.submission_repo(),
        assignments: state.assignment_repo(),
        courses: state.course_repo(),
    };
    usecase
        .execute(GradeSubmissionInput {
            submission_id,
            faculty_id: identity.user_id,
            grade: body.grade,
            feedback: body.feedback,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
