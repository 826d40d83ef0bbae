use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnboardingAnswers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OnboardingAnswers::UserId).string().not_null())
                    .col(ColumnDef::new(OnboardingAnswers::Answers).json().not_null())
                    .col(
                        ColumnDef::new(OnboardingAnswers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OnboardingAnswers::Table, OnboardingAnswers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnboardingAnswers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OnboardingAnswers {
    Table,
    Id,
    UserId,
    Answers,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
