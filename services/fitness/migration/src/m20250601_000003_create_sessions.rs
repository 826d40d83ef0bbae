use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sessions::PlanId).string().not_null())
                    .col(ColumnDef::new(Sessions::Id).string().not_null())
                    .col(ColumnDef::new(Sessions::Position).integer().not_null())
                    .col(ColumnDef::new(Sessions::Title).string().not_null())
                    .col(ColumnDef::new(Sessions::SessionData).json().not_null())
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(Index::create().col(Sessions::PlanId).col(Sessions::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sessions::Table, Sessions::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sessions {
    Table,
    PlanId,
    Id,
    Position,
    Title,
    SessionData,
    CreatedAt,
}

#[derive(Iden)]
enum Plans {
    Table,
    Id,
}
