use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;
use campus_domain::role::UserRole;

use campus_portal::domain::repository::{
    AssignmentRepository, BlobStore, CourseRepository, EnrollmentRepository, MaterialRepository,
    NotificationRepository, SubmissionRepository, UserRepository,
};
use campus_portal::domain::types::{
    Assignment, Course, CourseSubmissionRow, CourseWithFaculty, Enrollment, MaterialItem,
    Notification, RosterEntry, StudentAssignment, StudentCourse, StudentMaterial, StudentProfile,
    Submission, SubmissionReview, SubmissionStatus, User,
};
use campus_portal::error::PortalServiceError;

// ── Shared in-memory campus ──────────────────────────────────────────────────

/// All tables behind one lock, so one scenario can exercise several
/// repositories against consistent data.
#[derive(Default)]
pub struct CampusState {
    pub users: Vec<User>,
    pub profiles: Vec<StudentProfile>,
    pub courses: Vec<Course>,
    pub course_faculty: Vec<(String, String)>,
    pub enrollments: Vec<Enrollment>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
    pub notifications: Vec<Notification>,
    pub materials: Vec<MaterialItem>,
    pub blobs: HashMap<String, Vec<u8>>,
}

#[derive(Clone, Default)]
pub struct MemCampus {
    pub state: Arc<Mutex<CampusState>>,
}

impl MemCampus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> MemUserRepo {
        MemUserRepo(self.clone())
    }
    pub fn courses(&self) -> MemCourseRepo {
        MemCourseRepo(self.clone())
    }
    pub fn enrollments(&self) -> MemEnrollmentRepo {
        MemEnrollmentRepo(self.clone())
    }
    pub fn assignments(&self) -> MemAssignmentRepo {
        MemAssignmentRepo(self.clone())
    }
    pub fn submissions(&self) -> MemSubmissionRepo {
        MemSubmissionRepo(self.clone())
    }
    pub fn notifications(&self) -> MemNotificationRepo {
        MemNotificationRepo(self.clone())
    }
    pub fn materials(&self) -> MemMaterialRepo {
        MemMaterialRepo(self.clone())
    }
    pub fn blobs(&self) -> MemBlobStore {
        MemBlobStore(self.clone())
    }

    // Seed helpers used by the scenarios.

    pub fn add_student(&self, id: &str, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.users.push(test_user(id, name, UserRole::Student));
        state.profiles.push(StudentProfile {
            user_id: id.to_owned(),
            semester: 5,
            branch: "CSE".to_owned(),
            section: "A".to_owned(),
        });
    }

    pub fn add_faculty(&self, id: &str, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.users.push(test_user(id, name, UserRole::Faculty));
    }

    pub fn add_course(&self, id: &str, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.courses.push(Course {
            id: id.to_owned(),
            name: name.to_owned(),
        });
    }

    pub fn assign_faculty(&self, course_id: &str, faculty_id: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .course_faculty
            .push((course_id.to_owned(), faculty_id.to_owned()));
    }

    pub fn enroll(&self, student_id: &str, course_id: &str, faculty_id: &str) {
        let mut state = self.state.lock().unwrap();
        state.enrollments.push(Enrollment {
            id: Uuid::now_v7(),
            student_id: student_id.to_owned(),
            course_id: course_id.to_owned(),
            faculty_id: faculty_id.to_owned(),
            created_at: Utc::now(),
        });
    }
}

pub fn test_user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{}@example.edu", id.to_lowercase()),
        role,
        password_digest: "0".repeat(64),
        created_at: Utc::now(),
    }
}

// ── Repository implementations ───────────────────────────────────────────────

pub struct MemUserRepo(pub MemCampus);

impl UserRepository for MemUserRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        user: &User,
        profile: Option<&StudentProfile>,
        courses: &[Course],
    ) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if state.users.iter().any(|u| u.id == user.id) {
            return Err(PortalServiceError::UserAlreadyExists);
        }
        for course in courses {
            if state.courses.iter().any(|c| c.id == course.id) {
                return Err(PortalServiceError::CourseAlreadyExists);
            }
        }
        state.users.push(user.clone());
        if let Some(p) = profile {
            state.profiles.push(p.clone());
        }
        for course in courses {
            state.courses.push(course.clone());
            state
                .course_faculty
                .push((course.id.clone(), user.id.clone()));
        }
        Ok(())
    }
}

pub struct MemCourseRepo(pub MemCampus);

impl CourseRepository for MemCourseRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, course: &Course) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if state.courses.iter().any(|c| c.id == course.id) {
            return Err(PortalServiceError::CourseAlreadyExists);
        }
        state.courses.push(course.clone());
        Ok(())
    }

    async fn list_with_faculty(&self) -> Result<Vec<CourseWithFaculty>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out: Vec<CourseWithFaculty> = state
            .courses
            .iter()
            .map(|c| CourseWithFaculty {
                id: c.id.clone(),
                name: c.name.clone(),
                faculty_names: state
                    .course_faculty
                    .iter()
                    .filter(|(course_id, _)| *course_id == c.id)
                    .filter_map(|(_, faculty_id)| {
                        state
                            .users
                            .iter()
                            .find(|u| u.id == *faculty_id)
                            .map(|u| u.name.clone())
                    })
                    .collect(),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn assign_faculty(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if !state.courses.iter().any(|c| c.id == course_id) {
            return Err(PortalServiceError::CourseNotFound);
        }
        let pair = (course_id.to_owned(), faculty_id.to_owned());
        if state.course_faculty.contains(&pair) {
            return Err(PortalServiceError::FacultyAlreadyAssigned);
        }
        state.course_faculty.push(pair);
        Ok(())
    }

    async fn is_faculty_assigned(
        &self,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<bool, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .course_faculty
            .iter()
            .any(|(c, f)| c == course_id && f == faculty_id))
    }

    async fn list_for_faculty(&self, faculty_id: &str) -> Result<Vec<Course>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .courses
            .iter()
            .filter(|c| {
                state
                    .course_faculty
                    .iter()
                    .any(|(course_id, f)| *course_id == c.id && f == faculty_id)
            })
            .cloned()
            .collect())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentCourse>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .map(|e| StudentCourse {
                course_id: e.course_id.clone(),
                course_name: state
                    .courses
                    .iter()
                    .find(|c| c.id == e.course_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                faculty_name: state
                    .users
                    .iter()
                    .find(|u| u.id == e.faculty_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }
}

pub struct MemEnrollmentRepo(pub MemCampus);

impl EnrollmentRepository for MemEnrollmentRepo {
    async fn create(&self, enrollment: &Enrollment) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if state
            .enrollments
            .iter()
            .any(|e| e.student_id == enrollment.student_id && e.course_id == enrollment.course_id)
        {
            return Err(PortalServiceError::AlreadyEnrolled);
        }
        state.enrollments.push(enrollment.clone());
        Ok(())
    }

    async fn exists(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<bool, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id))
    }

    async fn student_ids_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<String>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .map(|e| e.student_id.clone())
            .collect())
    }

    async fn roster_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<RosterEntry>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut roster: Vec<RosterEntry> = state
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .filter_map(|e| {
                let student = state.users.iter().find(|u| u.id == e.student_id)?;
                let profile = state.profiles.iter().find(|p| p.user_id == e.student_id)?;
                let faculty = state.users.iter().find(|u| u.id == e.faculty_id)?;
                Some(RosterEntry {
                    student_id: student.id.clone(),
                    student_name: student.name.clone(),
                    semester: profile.semester,
                    branch: profile.branch.clone(),
                    section: profile.section.clone(),
                    faculty_id: faculty.id.clone(),
                    faculty_name: faculty.name.clone(),
                })
            })
            .collect();
        roster.sort_by(|a, b| a.student_name.cmp(&b.student_name));
        Ok(roster)
    }
}

pub struct MemAssignmentRepo(pub MemCampus);

impl AssignmentRepository for MemAssignmentRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state.assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn create_with_notifications(
        &self,
        assignment: &Assignment,
        notifications: &[Notification],
    ) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        state.assignments.push(assignment.clone());
        state.notifications.extend_from_slice(notifications);
        Ok(())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignment>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out: Vec<StudentAssignment> = state
            .assignments
            .iter()
            .filter(|a| {
                state
                    .enrollments
                    .iter()
                    .any(|e| e.student_id == student_id && e.course_id == a.course_id)
            })
            .map(|a| {
                let submission = state
                    .submissions
                    .iter()
                    .find(|s| s.assignment_id == a.id && s.student_id == student_id);
                let status = match submission {
                    Some(s) => s.status(),
                    None => SubmissionStatus::NotSubmitted,
                };
                StudentAssignment {
                    id: a.id,
                    course_id: a.course_id.clone(),
                    course_name: state
                        .courses
                        .iter()
                        .find(|c| c.id == a.course_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_default(),
                    title: a.title.clone(),
                    description: a.description.clone(),
                    deadline: a.deadline,
                    file_id: a.file_id.clone(),
                    status,
                    grade: submission.and_then(|s| s.grade),
                    feedback: submission.and_then(|s| s.feedback.clone()),
                }
            })
            .collect();
        out.sort_by_key(|a| a.deadline);
        Ok(out)
    }
}

pub struct MemSubmissionRepo(pub MemCampus);

impl SubmissionRepository for MemSubmissionRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state.submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, submission: &Submission) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if state
            .submissions
            .iter()
            .any(|s| s.assignment_id == submission.assignment_id && s.student_id == submission.student_id)
        {
            return Err(PortalServiceError::AlreadySubmitted);
        }
        state.submissions.push(submission.clone());
        Ok(())
    }

    async fn set_grade(
        &self,
        id: Uuid,
        grade: i16,
        feedback: Option<&str>,
    ) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        let submission = state
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(PortalServiceError::SubmissionNotFound)?;
        submission.grade = Some(grade);
        submission.feedback = feedback.map(str::to_owned);
        Ok(())
    }

    async fn list_for_assignment(
        &self,
        assignment_id: Uuid,
    ) -> Result<Vec<SubmissionReview>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out: Vec<SubmissionReview> = state
            .submissions
            .iter()
            .filter(|s| s.assignment_id == assignment_id)
            .map(|s| SubmissionReview {
                id: s.id,
                student_id: s.student_id.clone(),
                student_name: state
                    .users
                    .iter()
                    .find(|u| u.id == s.student_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_default(),
                file_id: s.file_id.clone(),
                submitted_at: s.submitted_at,
                grade: s.grade,
                feedback: s.feedback.clone(),
            })
            .collect();
        out.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(out)
    }

    async fn course_summary(
        &self,
        course_id: &str,
    ) -> Result<Vec<CourseSubmissionRow>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out = vec![];
        for a in state.assignments.iter().filter(|a| a.course_id == course_id) {
            let submissions: Vec<&Submission> = state
                .submissions
                .iter()
                .filter(|s| s.assignment_id == a.id)
                .collect();
            if submissions.is_empty() {
                out.push(CourseSubmissionRow {
                    assignment_title: a.title.clone(),
                    deadline: a.deadline,
                    student_name: None,
                    submitted_at: None,
                    grade: None,
                    feedback: None,
                });
            }
            for s in submissions {
                out.push(CourseSubmissionRow {
                    assignment_title: a.title.clone(),
                    deadline: a.deadline,
                    student_name: state
                        .users
                        .iter()
                        .find(|u| u.id == s.student_id)
                        .map(|u| u.name.clone()),
                    submitted_at: Some(s.submitted_at),
                    grade: s.grade,
                    feedback: s.feedback.clone(),
                });
            }
        }
        out.sort_by(|a, b| {
            b.deadline
                .cmp(&a.deadline)
                .then_with(|| a.student_name.cmp(&b.student_name))
        });
        Ok(out)
    }
}

pub struct MemNotificationRepo(pub MemCampus);

impl NotificationRepository for MemNotificationRepo {
    async fn list_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Notification>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn mark_read(&self, id: Uuid, user_id: &str) -> Result<bool, PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        match state
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        {
            Some(n) => {
                n.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemMaterialRepo(pub MemCampus);

impl MaterialRepository for MemMaterialRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MaterialItem>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        Ok(state.materials.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, material: &MaterialItem) -> Result<(), PortalServiceError> {
        let mut state = self.0.state.lock().unwrap();
        if !state.courses.iter().any(|c| c.id == material.course_id) {
            return Err(PortalServiceError::CourseNotFound);
        }
        state.materials.push(material.clone());
        Ok(())
    }

    async fn list_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentMaterial>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        let mut out: Vec<StudentMaterial> = state
            .materials
            .iter()
            .filter(|m| {
                state
                    .enrollments
                    .iter()
                    .any(|e| e.student_id == student_id && e.course_id == m.course_id)
            })
            .map(|m| StudentMaterial {
                id: m.id,
                course_id: m.course_id.clone(),
                course_name: state
                    .courses
                    .iter()
                    .find(|c| c.id == m.course_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                title: m.title.clone(),
                file_id: m.file_id.clone(),
                uploaded_at: m.uploaded_at,
            })
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }
}

pub struct MemBlobStore(pub MemCampus);

impl BlobStore for MemBlobStore {
    async fn store(
        &self,
        prefix: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, PortalServiceError> {
        let handle = format!("{prefix}/{}_{file_name}", Uuid::new_v4());
        let mut state = self.0.state.lock().unwrap();
        state.blobs.insert(handle.clone(), bytes.to_vec());
        Ok(handle)
    }

    async fn retrieve(&self, handle: &str) -> Result<Vec<u8>, PortalServiceError> {
        let state = self.0.state.lock().unwrap();
        state
            .blobs
            .get(handle)
            .cloned()
            .ok_or(PortalServiceError::MaterialNotFound)
    }
}
