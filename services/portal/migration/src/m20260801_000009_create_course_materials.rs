use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMaterials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::CourseId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMaterials::Title).string().not_null())
                    .col(ColumnDef::new(CourseMaterials::FileId).string().not_null())
                    .col(
                        ColumnDef::new(CourseMaterials::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseMaterials::Table, CourseMaterials::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(CourseMaterials::Table)
                    .col(CourseMaterials::CourseId)
                    .name("idx_course_materials_course_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseMaterials::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseMaterials {
    Table,
    Id,
    CourseId,
    Title,
    FileId,
    UploadedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
