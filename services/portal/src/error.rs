use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Portal service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PortalServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("course not found")]
    CourseNotFound,
    #[error("assignment not found")]
    AssignmentNotFound,
    #[error("submission not found")]
    SubmissionNotFound,
    #[error("notification not found")]
    NotificationNotFound,
    #[error("material not found")]
    MaterialNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("course already exists")]
    CourseAlreadyExists,
    #[error("faculty already assigned to course")]
    FacultyAlreadyAssigned,
    #[error("student already enrolled in course")]
    AlreadyEnrolled,
    #[error("assignment already submitted")]
    AlreadySubmitted,
    #[error("faculty not assigned to course")]
    FacultyNotAssigned,
    #[error("student not enrolled in course")]
    NotEnrolled,
    #[error("grade out of range")]
    GradeOutOfRange,
    #[error("semester out of range")]
    InvalidSemester,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PortalServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",
            Self::SubmissionNotFound => "SUBMISSION_NOT_FOUND",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::MaterialNotFound => "MATERIAL_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::CourseAlreadyExists => "COURSE_ALREADY_EXISTS",
            Self::FacultyAlreadyAssigned => "FACULTY_ALREADY_ASSIGNED",
            Self::AlreadyEnrolled => "ALREADY_ENROLLED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::FacultyNotAssigned => "FACULTY_NOT_ASSIGNED",
            Self::NotEnrolled => "NOT_ENROLLED",
            Self::GradeOutOfRange => "GRADE_OUT_OF_RANGE",
            Self::InvalidSemester => "INVALID_SEMESTER",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PortalServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::CourseNotFound
            | Self::AssignmentNotFound
            | Self::SubmissionNotFound
            | Self::NotificationNotFound
            | Self::MaterialNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists
            | Self::CourseAlreadyExists
            | Self::FacultyAlreadyAssigned
            | Self::AlreadyEnrolled
            | Self::AlreadySubmitted => StatusCode::CONFLICT,
            Self::FacultyNotAssigned
            | Self::GradeOutOfRange
            | Self::InvalidSemester
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::NotEnrolled | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
