//! Domain types shared across the campus portal workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod grade;
pub mod pagination;
pub mod profile;
pub mod role;
