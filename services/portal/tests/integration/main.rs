mod enrollment_test;
mod helpers;
mod notification_test;
mod registration_test;
