use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::Semester)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Branch).string().not_null())
                    .col(ColumnDef::new(StudentProfiles::Section).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StudentProfiles {
    Table,
    UserId,
    Semester,
    Branch,
    Section,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
