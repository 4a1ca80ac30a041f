use campus_domain::role::UserRole;

use campus_portal::error::PortalServiceError;
use campus_portal::usecase::user::{
    FacultyCourseInput, RegisterUserInput, RegisterUserUseCase, StudentProfileInput,
    password_digest,
};

use crate::helpers::MemCampus;

fn student_input(id: &str) -> RegisterUserInput {
    RegisterUserInput {
        id: id.to_owned(),
        name: "Asha".to_owned(),
        email: format!("{}@example.edu", id.to_lowercase()),
        password: "secret".to_owned(),
        role: UserRole::Student,
        profile: Some(StudentProfileInput {
            semester: 5,
            branch: "CSE".to_owned(),
            section: "A".to_owned(),
        }),
        courses: vec![],
    }
}

#[tokio::test]
async fn should_register_student_with_profile() {
    let campus = MemCampus::new();
    let uc = RegisterUserUseCase {
        repo: campus.users(),
    };
    uc.execute(student_input("S1")).await.unwrap();

    let state = campus.state.lock().unwrap();
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].password_digest, password_digest("secret"));
    assert_eq!(state.profiles.len(), 1);
    assert_eq!(state.profiles[0].user_id, "S1");
}

#[tokio::test]
async fn should_reject_duplicate_user_id() {
    let campus = MemCampus::new();
    let uc = RegisterUserUseCase {
        repo: campus.users(),
    };
    uc.execute(student_input("S1")).await.unwrap();
    let result = uc.execute(student_input("S1")).await;
    assert!(matches!(result, Err(PortalServiceError::UserAlreadyExists)));
    assert_eq!(campus.state.lock().unwrap().users.len(), 1);
}

#[tokio::test]
async fn should_register_faculty_with_courses_and_links() {
    let campus = MemCampus::new();
    let uc = RegisterUserUseCase {
        repo: campus.users(),
    };
    uc.execute(RegisterUserInput {
        id: "F1".to_owned(),
        name: "Rao".to_owned(),
        email: "f1@example.edu".to_owned(),
        password: "secret".to_owned(),
        role: UserRole::Faculty,
        profile: None,
        courses: vec![
            FacultyCourseInput {
                id: "CS301".to_owned(),
                name: "Databases".to_owned(),
            },
            FacultyCourseInput {
                id: "CS302".to_owned(),
                name: "Networks".to_owned(),
            },
        ],
    })
    .await
    .unwrap();

    let state = campus.state.lock().unwrap();
    assert_eq!(state.courses.len(), 2);
    assert!(state
        .course_faculty
        .contains(&("CS301".to_owned(), "F1".to_owned())));
    assert!(state
        .course_faculty
        .contains(&("CS302".to_owned(), "F1".to_owned())));
}

#[tokio::test]
async fn should_reject_faculty_registering_existing_course() {
    let campus = MemCampus::new();
    campus.add_course("CS301", "Databases");

    let uc = RegisterUserUseCase {
        repo: campus.users(),
    };
    let result = uc
        .execute(RegisterUserInput {
            id: "F1".to_owned(),
            name: "Rao".to_owned(),
            email: "f1@example.edu".to_owned(),
            password: "secret".to_owned(),
            role: UserRole::Faculty,
            profile: None,
            courses: vec![FacultyCourseInput {
                id: "CS301".to_owned(),
                name: "Databases".to_owned(),
            }],
        })
        .await;
    assert!(matches!(result, Err(PortalServiceError::CourseAlreadyExists)));
    // Nothing committed alongside the failed registration.
    assert!(campus.state.lock().unwrap().users.is_empty());
}
