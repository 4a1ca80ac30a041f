use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{
    BlobStore, CourseRepository, EnrollmentRepository, MaterialRepository,
};
use crate::domain::types::{MaterialItem, StudentMaterial};
use crate::error::PortalServiceError;

// ── PublishMaterial ──────────────────────────────────────────────────────────

pub struct PublishMaterialInput {
    pub course_id: String,
    pub faculty_id: String,
    pub title: String,
    pub file_id: String,
}

pub struct PublishMaterialUseCase<M, C>
where
    M: MaterialRepository,
    C: CourseRepository,
{
    pub materials: M,
    pub courses: C,
}

impl<M, C> PublishMaterialUseCase<M, C>
where
    M: MaterialRepository,
    C: CourseRepository,
{
    /// Publishing a material stores the catalog row and nothing else;
    /// unlike assignments there is no notification fan-out.
    pub async fn execute(&self, input: PublishMaterialInput) -> Result<Uuid, PortalServiceError> {
        if input.title.is_empty() {
            return Err(PortalServiceError::MissingData);
        }
        self.courses
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

        let material = MaterialItem {
            id: Uuid::now_v7(),
            course_id: input.course_id,
            title: input.title,
            file_id: input.file_id,
            uploaded_at: Utc::now(),
        };
        self.materials.create(&material).await?;
        Ok(material.id)
    }
}

// ── ListMaterialsForStudent ──────────────────────────────────────────────────

pub struct ListMaterialsForStudentUseCase<M: MaterialRepository> {
    pub materials: M,
}

impl<M: MaterialRepository> ListMaterialsForStudentUseCase<M> {
    pub async fn execute(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentMaterial>, PortalServiceError> {
        self.materials.list_for_student(student_id).await
    }
}

// ── DownloadMaterial ─────────────────────────────────────────────────────────

pub struct DownloadMaterialUseCase<M, E, B>
where
    M: MaterialRepository,
    E: EnrollmentRepository,
    B: BlobStore,
{
    pub materials: M,
    pub enrollments: E,
    pub blob: B,
}

pub struct MaterialDownload {
    pub title: String,
    pub bytes: Vec<u8>,
}

impl<M, E, B> DownloadMaterialUseCase<M, E, B>
where
    M: MaterialRepository,
    E: EnrollmentRepository,
    B: BlobStore,
{
    /// Students can only fetch materials of courses they are enrolled in.
    pub async fn execute(
        &self,
        material_id: Uuid,
        student_id: &str,
    ) -> Result<MaterialDownload, PortalServiceError> {
        let material = self
            .materials
            .find_by_id(material_id)
            .await?
            .ok_or(PortalServiceError::MaterialNotFound)?;
        if !self
            .enrollments
            .exists(student_id, &material.course_id)
            .await?
        {
            return Err(PortalServiceError::NotEnrolled);
        }
        let bytes = self.blob.retrieve(&material.file_id).await?;
        Ok(MaterialDownload {
            title: material.title,
            bytes,
        })
    }
}
