use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Plans::Table)
                    .col(Plans::UserId)
                    .col(Plans::CreatedAt)
                    .name("idx_plans_user_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(OnboardingAnswers::Table)
                    .col(OnboardingAnswers::UserId)
                    .col(OnboardingAnswers::CreatedAt)
                    .name("idx_onboarding_answers_user_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_onboarding_answers_user_id_created_at")
                    .table(OnboardingAnswers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_plans_user_id_created_at")
                    .table(Plans::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Plans {
    Table,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum OnboardingAnswers {
    Table,
    UserId,
    CreatedAt,
}
