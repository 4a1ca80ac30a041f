use sea_orm::DatabaseConnection;

use crate::infra::blob::FsBlobStore;
use crate::infra::db::{
    DbAssignmentRepository, DbCourseRepository, DbEnrollmentRepository, DbMaterialRepository,
    DbNotificationRepository, DbSubmissionRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub blob: FsBlobStore,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn assignment_repo(&self) -> DbAssignmentRepository {
        DbAssignmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn submission_repo(&self) -> DbSubmissionRepository {
        DbSubmissionRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn material_repo(&self) -> DbMaterialRepository {
        DbMaterialRepository {
            db: self.db.clone(),
        }
    }
}
