use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseFaculty::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseFaculty::CourseId).string().not_null())
                    .col(ColumnDef::new(CourseFaculty::FacultyId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(CourseFaculty::CourseId)
                            .col(CourseFaculty::FacultyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseFaculty::Table, CourseFaculty::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseFaculty::Table, CourseFaculty::FacultyId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseFaculty::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseFaculty {
    Table,
    CourseId,
    FacultyId,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
