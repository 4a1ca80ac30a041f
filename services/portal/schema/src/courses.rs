use sea_orm::entity::prelude::*;

/// Course, keyed by its externally assigned code (e.g. "CS301").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_faculty::Entity")]
    CourseFaculty,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::course_materials::Entity")]
    CourseMaterials,
}

impl Related<super::course_faculty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseFaculty.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::course_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
