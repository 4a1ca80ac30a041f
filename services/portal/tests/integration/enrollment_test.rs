use campus_portal::error::PortalServiceError;
use campus_portal::usecase::course::AssignFacultyUseCase;
use campus_portal::usecase::enrollment::{
    CourseRosterUseCase, EnrollStudentInput, EnrollStudentUseCase,
};

use crate::helpers::MemCampus;

fn seeded_campus() -> MemCampus {
    let campus = MemCampus::new();
    campus.add_course("CS301", "Databases");
    campus.add_faculty("F1", "Rao");
    campus.add_faculty("F2", "Iyer");
    campus.assign_faculty("CS301", "F1");
    campus.add_student("S1", "Asha");
    campus.add_student("S2", "Bala");
    campus
}

fn enroll_input(student_id: &str, faculty_id: &str) -> EnrollStudentInput {
    EnrollStudentInput {
        course_id: "CS301".to_owned(),
        student_id: student_id.to_owned(),
        faculty_id: faculty_id.to_owned(),
    }
}

#[tokio::test]
async fn should_keep_first_supervisor_when_enrolled_twice() {
    let campus = seeded_campus();
    campus.assign_faculty("CS301", "F2");
    let uc = EnrollStudentUseCase {
        enrollments: campus.enrollments(),
        courses: campus.courses(),
        users: campus.users(),
    };

    uc.execute(enroll_input("S1", "F1")).await.unwrap();
    let result = uc.execute(enroll_input("S1", "F2")).await;
    assert!(matches!(result, Err(PortalServiceError::AlreadyEnrolled)));

    let state = campus.state.lock().unwrap();
    assert_eq!(state.enrollments.len(), 1);
    assert_eq!(state.enrollments[0].faculty_id, "F1");
}

#[tokio::test]
async fn should_reject_enrollment_under_unassigned_faculty() {
    let campus = seeded_campus();
    let uc = EnrollStudentUseCase {
        enrollments: campus.enrollments(),
        courses: campus.courses(),
        users: campus.users(),
    };
    let result = uc.execute(enroll_input("S1", "F2")).await;
    assert!(matches!(result, Err(PortalServiceError::FacultyNotAssigned)));
}

#[tokio::test]
async fn should_reject_double_faculty_assignment() {
    let campus = seeded_campus();
    let uc = AssignFacultyUseCase {
        courses: campus.courses(),
        users: campus.users(),
    };
    let result = uc.execute("CS301", "F1").await;
    assert!(matches!(
        result,
        Err(PortalServiceError::FacultyAlreadyAssigned)
    ));
}

#[tokio::test]
async fn should_order_roster_by_student_name() {
    let campus = seeded_campus();
    let uc = EnrollStudentUseCase {
        enrollments: campus.enrollments(),
        courses: campus.courses(),
        users: campus.users(),
    };
    // Enroll in reverse name order; the roster re-sorts.
    uc.execute(enroll_input("S2", "F1")).await.unwrap();
    uc.execute(enroll_input("S1", "F1")).await.unwrap();

    let roster_uc = CourseRosterUseCase {
        enrollments: campus.enrollments(),
        courses: campus.courses(),
    };
    let roster = roster_uc.execute("CS301", "F1").await.unwrap();
    let names: Vec<&str> = roster.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, ["Asha", "Bala"]);
    assert!(roster.iter().all(|r| r.faculty_name == "Rao"));
}

#[tokio::test]
async fn should_hide_roster_from_unassigned_faculty() {
    let campus = seeded_campus();
    let roster_uc = CourseRosterUseCase {
        enrollments: campus.enrollments(),
        courses: campus.courses(),
    };
    let result = roster_uc.execute("CS301", "F2").await;
    assert!(matches!(result, Err(PortalServiceError::FacultyNotAssigned)));
}
