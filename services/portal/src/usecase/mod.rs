pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod material;
pub mod notification;
pub mod user;
