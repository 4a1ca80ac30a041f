use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, SqlErr, Statement,
    TransactionError, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use campus_domain::pagination::PageRequest;
use campus_domain::role::UserRole;
use campus_portal_schema::{
    assignments, course_faculty, course_materials, courses, enrollments, notifications,
    student_profiles, submissions, users,
};

use crate::domain::repository::{
    AssignmentRepository, CourseRepository, EnrollmentRepository, MaterialRepository,
    NotificationRepository, SubmissionRepository, UserRepository,
};
use crate::domain::types::{
    Assignment, Course, CourseSubmissionRow, CourseWithFaculty, Enrollment, MaterialItem,
    Notification, RosterEntry, StudentAssignment, StudentCourse, StudentMaterial, StudentProfile,
    Submission, SubmissionReview, SubmissionStatus, User,
};
use crate::error::PortalServiceError;

/// Map a database error onto the service taxonomy: connectivity loss
/// becomes `StorageUnavailable`, everything else wraps into `Internal`.
fn storage_err(e: DbErr, what: &'static str) -> PortalServiceError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => PortalServiceError::StorageUnavailable,
        other => PortalServiceError::Internal(anyhow::Error::new(other).context(what)),
    }
}

fn unwrap_txn(e: TransactionError<DbErr>) -> DbErr {
    match e {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, PortalServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "find user by id"))?;
        model.map(user_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortalServiceError> {
        let page = page.clamped();
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| storage_err(e, "list users"))?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn create(
        &self,
        user: &User,
        profile: Option<&StudentProfile>,
        extra_courses: &[Course],
    ) -> Result<(), PortalServiceError> {
        let result = self
            .db
            .transaction::<_, (), DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.cloned();
                let extra_courses = extra_courses.to_vec();
                Box::pin(async move {
                    users::ActiveModel {
                        id: Set(user.id.clone()),
                        name: Set(user.name.clone()),
                        email: Set(user.email.clone()),
                        role: Set(user.role.as_i16()),
                        password_digest: Set(user.password_digest.clone()),
                        created_at: Set(user.created_at),
                    }
                    .insert(txn)
                    .await?;

                    if let Some(profile) = profile {
                        student_profiles::ActiveModel {
                            user_id: Set(user.id.clone()),
                            semester: Set(profile.semester),
                            branch: Set(profile.branch.clone()),
                            section: Set(profile.section.clone()),
                        }
                        .insert(txn)
                        .await?;
                    }

                    for course in &extra_courses {
                        courses::ActiveModel {
                            id: Set(course.id.clone()),
                            name: Set(course.name.clone()),
                        }
                        .insert(txn)
                        .await?;
                        course_faculty::ActiveModel {
                            course_id: Set(course.id.clone()),
                            faculty_id: Set(user.id.clone()),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await;

        result.map_err(|e| {
            let e = unwrap_txn(e);
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("users") => {
                    PortalServiceError::UserAlreadyExists
                }
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("course_faculty") => {
                    PortalServiceError::FacultyAlreadyAssigned
                }
                Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("courses") => {
                    PortalServiceError::CourseAlreadyExists
                }
                _ => storage_err(e, "register user"),
            }
        })
    }
}

fn user_from_model(model: users::Model) -> Result<User, PortalServiceError> {
    let role = UserRole::from_i16(model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown role value {} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        role,
        password_digest: model.password_digest,
        created_at: model.created_at,
    })
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, PortalServiceError> {
        let model = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "find course by id"))?;
        Ok(model.map(course_from_model))
    }

    async fn create(&self, course: &Course) -> Result<(), PortalServiceError> {
        courses::ActiveModel {
            id: Set(course.id.clone()),
            name: Set(course.name.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => PortalServiceError::CourseAlreadyExists,
            _ => storage_err(e, "create course"),
        })?;
        Ok(())
    }

    async fn list_with_faculty(&self) -> Result<Vec<CourseWithFaculty>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            course_id: String,
            course_name: String,
            faculty_name: Option<String>,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT c.id AS course_id, c.name AS course_name, u.name AS faculty_name
            FROM courses c
            LEFT JOIN course_faculty cf ON cf.course_id = c.id
            LEFT JOIN users u ON u.id = cf.faculty_id
            ORDER BY c.name ASC, u.name ASC
            "#,
            [],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list courses with faculty"))?;

        // One row per (course, faculty); fold consecutive rows of the same
        // course into a single entry.
        let mut result: Vec<CourseWithFaculty> = Vec::new();
        for row in rows {
            match result.last_mut() {
                Some(last) if last.id == row.course_id => {
                    last.faculty_names.extend(row.faculty_name);
                }
                _ => result.push(CourseWithFaculty {
                    id: row.course_id,
                    name: row.course_name,
                    faculty_names: row.faculty_name.into_iter().collect(),
                }),
            }
        }
        Ok(result)
    }

    async fn assign_faculty(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<(), PortalServiceError> {
        course_faculty::ActiveModel {
            course_id: Set(course_id.to_owned()),
            faculty_id: Set(faculty_id.to_owned()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                PortalServiceError::FacultyAlreadyAssigned
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => PortalServiceError::CourseNotFound,
            _ => storage_err(e, "assign faculty to course"),
        })?;
        Ok(())
    }

    async fn is_faculty_assigned(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<bool, PortalServiceError> {
        let model = course_faculty::Entity::find_by_id((course_id.to_owned(), faculty_id.to_owned()))
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "check faculty assignment"))?;
        Ok(model.is_some())
    }

    async fn list_for_faculty(&self, faculty_id: &str) -> Result<Vec<Course>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            id: String,
            name: String,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT c.id, c.name
            FROM courses c
            JOIN course_faculty cf ON cf.course_id = c.id
            WHERE cf.faculty_id = $1
            ORDER BY c.name ASC
            "#,
            [faculty_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list courses for faculty"))?;

        Ok(rows
            .into_iter()
            .map(|row| Course {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentCourse>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            course_id: String,
            course_name: String,
            faculty_name: String,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT e.course_id, c.name AS course_name, u.name AS faculty_name
            FROM enrollments e
            JOIN courses c ON c.id = e.course_id
            JOIN users u ON u.id = e.faculty_id
            WHERE e.student_id = $1
            ORDER BY c.name ASC
            "#,
            [student_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list courses for student"))?;

        Ok(rows
            .into_iter()
            .map(|row| StudentCourse {
                course_id: row.course_id,
                course_name: row.course_name,
                faculty_name: row.faculty_name,
            })
            .collect())
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        name: model.name,
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn create(&self, enrollment: &Enrollment) -> Result<(), PortalServiceError> {
        enrollments::ActiveModel {
            id: Set(enrollment.id),
            student_id: Set(enrollment.student_id.clone()),
            course_id: Set(enrollment.course_id.clone()),
            faculty_id: Set(enrollment.faculty_id.clone()),
            created_at: Set(enrollment.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The unique index on (student_id, course_id) decides
            // concurrent races; the first enrollment sticks.
            Some(SqlErr::UniqueConstraintViolation(_)) => PortalServiceError::AlreadyEnrolled,
            _ => storage_err(e, "create enrollment"),
        })?;
        Ok(())
    }

    async fn exists(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<bool, PortalServiceError> {
        let model = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "check enrollment"))?;
        Ok(model.is_some())
    }

    async fn student_ids_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<String>, PortalServiceError> {
        let models = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| storage_err(e, "list enrolled student ids"))?;
        Ok(models.into_iter().map(|m| m.student_id).collect())
    }

    async fn roster_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<RosterEntry>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            student_id: String,
            student_name: String,
            semester: i16,
            branch: String,
            section: String,
            faculty_id: String,
            faculty_name: String,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT e.student_id, su.name AS student_name,
                   sp.semester, sp.branch, sp.section,
                   e.faculty_id, fu.name AS faculty_name
            FROM enrollments e
            JOIN users su ON su.id = e.student_id
            JOIN student_profiles sp ON sp.user_id = e.student_id
            JOIN users fu ON fu.id = e.faculty_id
            WHERE e.course_id = $1
            ORDER BY su.name ASC
            "#,
            [course_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list course roster"))?;

        Ok(rows
            .into_iter()
            .map(|row| RosterEntry {
                student_id: row.student_id,
                student_name: row.student_name,
                semester: row.semester,
                branch: row.branch,
                section: row.section,
                faculty_id: row.faculty_id,
                faculty_name: row.faculty_name,
            })
            .collect())
    }
}

// ── Assignment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssignmentRepository {
    pub db: DatabaseConnection,
}

impl AssignmentRepository for DbAssignmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, PortalServiceError> {
        let model = assignments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "find assignment by id"))?;
        Ok(model.map(assignment_from_model))
    }

    async fn create_with_notifications(
        &self,
        assignment: &Assignment,
        fanout: &[Notification],
    ) -> Result<(), PortalServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let assignment = assignment.clone();
                let fanout = fanout.to_vec();
                Box::pin(async move {
                    assignments::ActiveModel {
                        id: Set(assignment.id),
                        course_id: Set(assignment.course_id.clone()),
                        title: Set(assignment.title.clone()),
                        description: Set(assignment.description.clone()),
                        deadline: Set(assignment.deadline),
                        file_id: Set(assignment.file_id.clone()),
                        created_at: Set(assignment.created_at),
                    }
                    .insert(txn)
                    .await?;

                    for notification in &fanout {
                        notifications::ActiveModel {
                            id: Set(notification.id),
                            user_id: Set(notification.user_id.clone()),
                            message: Set(notification.message.clone()),
                            is_read: Set(notification.is_read),
                            created_at: Set(notification.created_at),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .map_err(|e| storage_err(unwrap_txn(e), "create assignment with fan-out"))?;
        Ok(())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignment>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            id: Uuid,
            course_id: String,
            course_name: String,
            title: String,
            description: String,
            deadline: chrono::NaiveDate,
            file_id: Option<String>,
            submitted_at: Option<chrono::DateTime<chrono::Utc>>,
            grade: Option<i16>,
            feedback: Option<String>,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT a.id, a.course_id, c.name AS course_name, a.title, a.description,
                   a.deadline, a.file_id, s.submitted_at, s.grade, s.feedback
            FROM assignments a
            JOIN courses c ON c.id = a.course_id
            JOIN enrollments e ON e.course_id = a.course_id AND e.student_id = $1
            LEFT JOIN submissions s ON s.assignment_id = a.id AND s.student_id = $1
            ORDER BY a.deadline ASC
            "#,
            [student_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list assignments for student"))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let status = match (row.submitted_at.is_some(), row.grade.is_some()) {
                    (_, true) => SubmissionStatus::Graded,
                    (true, false) => SubmissionStatus::Submitted,
                    (false, false) => SubmissionStatus::NotSubmitted,
                };
                StudentAssignment {
                    id: row.id,
                    course_id: row.course_id,
                    course_name: row.course_name,
                    title: row.title,
                    description: row.description,
                    deadline: row.deadline,
                    file_id: row.file_id,
                    status,
                    grade: row.grade,
                    feedback: row.feedback,
                }
            })
            .collect())
    }
}

fn assignment_from_model(model: assignments::Model) -> Assignment {
    Assignment {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        description: model.description,
        deadline: model.deadline,
        file_id: model.file_id,
        created_at: model.created_at,
    }
}

// ── Submission repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSubmissionRepository {
    pub db: DatabaseConnection,
}

impl SubmissionRepository for DbSubmissionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, PortalServiceError> {
        let model = submissions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "find submission by id"))?;
        Ok(model.map(submission_from_model))
    }

    async fn create(&self, submission: &Submission) -> Result<(), PortalServiceError> {
        submissions::ActiveModel {
            id: Set(submission.id),
            assignment_id: Set(submission.assignment_id),
            student_id: Set(submission.student_id.clone()),
            file_id: Set(submission.file_id.clone()),
            submitted_at: Set(submission.submitted_at),
            grade: Set(submission.grade),
            feedback: Set(submission.feedback.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // Unique index on (assignment_id, student_id): a new upload is
            // a fresh create, never an update.
            Some(SqlErr::UniqueConstraintViolation(_)) => PortalServiceError::AlreadySubmitted,
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                PortalServiceError::AssignmentNotFound
            }
            _ => storage_err(e, "create submission"),
        })?;
        Ok(())
    }

    async fn set_grade(
        &self,
        id: Uuid,
        grade: i16,
        feedback: Option<&str>,
    ) -> Result<(), PortalServiceError> {
        let result = submissions::Entity::update_many()
            .filter(submissions::Column::Id.eq(id))
            .col_expr(submissions::Column::Grade, Expr::value(Some(grade)))
            .col_expr(
                submissions::Column::Feedback,
                Expr::value(feedback.map(str::to_owned)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| storage_err(e, "set grade and feedback"))?;
        if result.rows_affected == 0 {
            return Err(PortalServiceError::SubmissionNotFound);
        }
        Ok(())
    }

    async fn list_for_assignment(
        &self,
        assignment_id: Uuid,
    ) -> Result<Vec<SubmissionReview>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            id: Uuid,
            student_id: String,
            student_name: String,
            file_id: String,
            submitted_at: chrono::DateTime<chrono::Utc>,
            grade: Option<i16>,
            feedback: Option<String>,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT s.id, s.student_id, u.name AS student_name, s.file_id,
                   s.submitted_at, s.grade, s.feedback
            FROM submissions s
            JOIN users u ON u.id = s.student_id
            WHERE s.assignment_id = $1
            ORDER BY s.submitted_at DESC
            "#,
            [assignment_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list submissions for assignment"))?;

        Ok(rows
            .into_iter()
            .map(|row| SubmissionReview {
                id: row.id,
                student_id: row.student_id,
                student_name: row.student_name,
                file_id: row.file_id,
                submitted_at: row.submitted_at,
                grade: row.grade,
                feedback: row.feedback,
            })
            .collect())
    }

    async fn course_summary(
        &self,
        course_id: &str,
    ) -> Result<Vec<CourseSubmissionRow>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            assignment_title: String,
            deadline: chrono::NaiveDate,
            student_name: Option<String>,
            submitted_at: Option<chrono::DateTime<chrono::Utc>>,
            grade: Option<i16>,
            feedback: Option<String>,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT a.title AS assignment_title, a.deadline, u.name AS student_name,
                   s.submitted_at, s.grade, s.feedback
            FROM assignments a
            LEFT JOIN submissions s ON s.assignment_id = a.id
            LEFT JOIN users u ON u.id = s.student_id
            WHERE a.course_id = $1
            ORDER BY a.deadline DESC, u.name ASC
            "#,
            [course_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list course submission summary"))?;

        Ok(rows
            .into_iter()
            .map(|row| CourseSubmissionRow {
                assignment_title: row.assignment_title,
                deadline: row.deadline,
                student_name: row.student_name,
                submitted_at: row.submitted_at,
                grade: row.grade,
                feedback: row.feedback,
            })
            .collect())
    }
}

fn submission_from_model(model: submissions::Model) -> Submission {
    Submission {
        id: model.id,
        assignment_id: model.assignment_id,
        student_id: model.student_id,
        file_id: model.file_id,
        submitted_at: model.submitted_at,
        grade: model.grade,
        feedback: model.feedback,
    }
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn list_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Notification>, PortalServiceError> {
        let page = page.clamped();
        let models = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| storage_err(e, "list notifications"))?;
        Ok(models.into_iter().map(notification_from_model).collect())
    }

    async fn mark_read(&self, id: Uuid, user_id: &str) -> Result<bool, PortalServiceError> {
        // Ownership is part of the filter: a mismatched caller touches
        // zero rows and the flag stays unchanged.
        let result = notifications::Entity::update_many()
            .filter(notifications::Column::Id.eq(id))
            .filter(notifications::Column::UserId.eq(user_id))
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .exec(&self.db)
            .await
            .map_err(|e| storage_err(e, "mark notification read"))?;
        Ok(result.rows_affected > 0)
    }
}

fn notification_from_model(model: notifications::Model) -> Notification {
    Notification {
        id: model.id,
        user_id: model.user_id,
        message: model.message,
        is_read: model.is_read,
        created_at: model.created_at,
    }
}

// ── Material repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMaterialRepository {
    pub db: DatabaseConnection,
}

impl MaterialRepository for DbMaterialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MaterialItem>, PortalServiceError> {
        let model = course_materials::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| storage_err(e, "find material by id"))?;
        Ok(model.map(material_from_model))
    }

    async fn create(&self, material: &MaterialItem) -> Result<(), PortalServiceError> {
        course_materials::ActiveModel {
            id: Set(material.id),
            course_id: Set(material.course_id.clone()),
            title: Set(material.title.clone()),
            file_id: Set(material.file_id.clone()),
            uploaded_at: Set(material.uploaded_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => PortalServiceError::CourseNotFound,
            _ => storage_err(e, "create material"),
        })?;
        Ok(())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentMaterial>, PortalServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct Row {
            id: Uuid,
            course_id: String,
            course_name: String,
            title: String,
            file_id: String,
            uploaded_at: chrono::DateTime<chrono::Utc>,
        }

        let rows = Row::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT m.id, m.course_id, c.name AS course_name, m.title,
                   m.file_id, m.uploaded_at
            FROM course_materials m
            JOIN courses c ON c.id = m.course_id
            JOIN enrollments e ON e.course_id = m.course_id AND e.student_id = $1
            ORDER BY m.uploaded_at DESC
            "#,
            [student_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| storage_err(e, "list materials for student"))?;

        Ok(rows
            .into_iter()
            .map(|row| StudentMaterial {
                id: row.id,
                course_id: row.course_id,
                course_name: row.course_name,
                title: row.title,
                file_id: row.file_id,
                uploaded_at: row.uploaded_at,
            })
            .collect())
    }
}

fn material_from_model(model: course_materials::Model) -> MaterialItem {
    MaterialItem {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        file_id: model.file_id,
        uploaded_at: model.uploaded_at,
    }
}
