use chrono::NaiveDate;
use uuid::Uuid;

use campus_domain::pagination::PageRequest;

use campus_portal::error::PortalServiceError;
use campus_portal::usecase::assignment::{CreateAssignmentInput, CreateAssignmentUseCase};
use campus_portal::usecase::material::{PublishMaterialInput, PublishMaterialUseCase};
use campus_portal::usecase::notification::{
    ListNotificationsUseCase, MarkNotificationReadUseCase,
};

use crate::helpers::MemCampus;

fn seeded_campus(students: &[&str]) -> MemCampus {
    let campus = MemCampus::new();
    campus.add_course("CS301", "Databases");
    campus.add_faculty("F1", "Rao");
    campus.assign_faculty("CS301", "F1");
    for (i, id) in students.iter().enumerate() {
        campus.add_student(id, &format!("Student {i}"));
        campus.enroll(id, "CS301", "F1");
    }
    campus
}

fn hw1(campus: &MemCampus) -> CreateAssignmentUseCase<
    crate::helpers::MemAssignmentRepo,
    crate::helpers::MemCourseRepo,
    crate::helpers::MemEnrollmentRepo,
> {
    CreateAssignmentUseCase {
        assignments: campus.assignments(),
        courses: campus.courses(),
        enrollments: campus.enrollments(),
    }
}

fn hw1_input() -> CreateAssignmentInput {
    CreateAssignmentInput {
        course_id: "CS301".to_owned(),
        faculty_id: "F1".to_owned(),
        title: "HW1".to_owned(),
        description: "Chapters 1-3".to_owned(),
        deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        file_id: None,
    }
}

#[tokio::test]
async fn should_notify_every_enrolled_student_once() {
    let campus = seeded_campus(&["S1", "S2", "S3"]);
    hw1(&campus).execute(hw1_input()).await.unwrap();

    let state = campus.state.lock().unwrap();
    assert_eq!(state.notifications.len(), 3);
    assert!(state.notifications.iter().all(|n| !n.is_read));
    let mut recipients: Vec<&str> = state
        .notifications
        .iter()
        .map(|n| n.user_id.as_str())
        .collect();
    recipients.sort();
    assert_eq!(recipients, ["S1", "S2", "S3"]);
    assert_eq!(
        state.notifications[0].message,
        "New assignment 'HW1' has been uploaded for Databases. Deadline: 2024-03-01"
    );
}

#[tokio::test]
async fn should_not_notify_students_enrolled_after_publication() {
    let campus = seeded_campus(&["S1"]);
    hw1(&campus).execute(hw1_input()).await.unwrap();

    // S2 enrolls after the assignment went out; the snapshot is fixed.
    campus.add_student("S2", "Late Joiner");
    campus.enroll("S2", "CS301", "F1");

    let uc = ListNotificationsUseCase {
        notifications: campus.notifications(),
    };
    let for_late = uc.execute("S2", PageRequest::default()).await.unwrap();
    assert!(for_late.is_empty());
    let for_early = uc.execute("S1", PageRequest::default()).await.unwrap();
    assert_eq!(for_early.len(), 1);
}

#[tokio::test]
async fn should_only_let_owner_mark_notification_read() {
    let campus = seeded_campus(&["S1", "S2"]);
    hw1(&campus).execute(hw1_input()).await.unwrap();

    let s1_notification = {
        let state = campus.state.lock().unwrap();
        state
            .notifications
            .iter()
            .find(|n| n.user_id == "S1")
            .unwrap()
            .id
    };

    let uc = MarkNotificationReadUseCase {
        notifications: campus.notifications(),
    };
    let result = uc.execute(s1_notification, "S2").await;
    assert!(matches!(
        result,
        Err(PortalServiceError::NotificationNotFound)
    ));
    // Still unread for the actual owner.
    let state = campus.state.lock().unwrap();
    let n = state
        .notifications
        .iter()
        .find(|n| n.id == s1_notification)
        .unwrap();
    assert!(!n.is_read);
}

#[tokio::test]
async fn should_mark_read_for_owner_and_ignore_unknown_id() {
    let campus = seeded_campus(&["S1"]);
    hw1(&campus).execute(hw1_input()).await.unwrap();
    let id = campus.state.lock().unwrap().notifications[0].id;

    let uc = MarkNotificationReadUseCase {
        notifications: campus.notifications(),
    };
    uc.execute(id, "S1").await.unwrap();
    assert!(campus.state.lock().unwrap().notifications[0].is_read);

    let result = uc.execute(Uuid::now_v7(), "S1").await;
    assert!(matches!(
        result,
        Err(PortalServiceError::NotificationNotFound)
    ));
}

#[tokio::test]
async fn should_not_notify_anyone_for_published_material() {
    let campus = seeded_campus(&["S1", "S2"]);
    let uc = PublishMaterialUseCase {
        materials: campus.materials(),
        courses: campus.courses(),
    };
    uc.execute(PublishMaterialInput {
        course_id: "CS301".to_owned(),
        faculty_id: "F1".to_owned(),
        title: "Week 1 slides".to_owned(),
        file_id: "materials/x".to_owned(),
    })
    .await
    .unwrap();

    let state = campus.state.lock().unwrap();
    assert_eq!(state.materials.len(), 1);
    assert!(state.notifications.is_empty());
}
