use axum::{
    Router,
    routing::{get, patch, post},
};

use campus_core::health::{healthz, readyz};
use campus_core::middleware::request_id_layer;

use crate::handlers::{
    assignment::{
        create_assignment, get_course_submissions, get_my_assignments, get_submissions,
        grade_submission, submit_assignment,
    },
    course::{assign_faculty, create_course, get_courses, get_my_courses},
    enrollment::{enroll_student, get_roster},
    material::{download_material, get_my_materials, publish_material},
    notification::{get_notifications, mark_notification_read},
    user::{get_me, list_users, register_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(register_user))
        .route("/users", get(list_users))
        .route("/users/@me", get(get_me))
        // Courses
        .route("/courses", post(create_course))
        .route("/courses", get(get_courses))
        .route("/courses/{id}/faculty", post(assign_faculty))
        .route("/users/@me/courses", get(get_my_courses))
        // Enrollments
        .route("/enrollments", post(enroll_student))
        .route("/courses/{id}/roster", get(get_roster))
        // Assignments and submissions
        .route("/courses/{id}/assignments", post(create_assignment))
        .route("/users/@me/assignments", get(get_my_assignments))
        .route("/assignments/{id}/submissions", post(submit_assignment))
        .route("/assignments/{id}/submissions", get(get_submissions))
        .route("/courses/{id}/submissions", get(get_course_submissions))
        .route("/submissions/{id}/grade", patch(grade_submission))
        // Materials
        .route("/courses/{id}/materials", post(publish_material))
        .route("/users/@me/materials", get(get_my_materials))
        .route("/materials/{id}/file", get(download_material))
        // Notifications
        .route("/users/@me/notifications", get(get_notifications))
        .route("/notifications/{id}/read", patch(mark_notification_read))
        .layer(request_id_layer())
        .with_state(state)
}
