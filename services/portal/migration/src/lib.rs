use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_student_profiles;
mod m20260801_000003_create_courses;
mod m20260801_000004_create_course_faculty;
mod m20260801_000005_create_enrollments;
mod m20260801_000006_create_assignments;
mod m20260801_000007_create_submissions;
mod m20260801_000008_create_notifications;
mod m20260801_000009_create_course_materials;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_student_profiles::Migration),
            Box::new(m20260801_000003_create_courses::Migration),
            Box::new(m20260801_000004_create_course_faculty::Migration),
            Box::new(m20260801_000005_create_enrollments::Migration),
            Box::new(m20260801_000006_create_assignments::Migration),
            Box::new(m20260801_000007_create_submissions::Migration),
            Box::new(m20260801_000008_create_notifications::Migration),
            Box::new(m20260801_000009_create_course_materials::Migration),
        ]
    }
}
