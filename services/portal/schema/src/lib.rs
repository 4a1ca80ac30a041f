//! sea-orm entities for the campus portal service, one module per table.

pub mod assignments;
pub mod course_faculty;
pub mod course_materials;
pub mod courses;
pub mod enrollments;
pub mod notifications;
pub mod student_profiles;
pub mod submissions;
pub mod users;
