use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::Expr;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdoptionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdoptionRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::PetId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdoptionRequests::Message).text().null())
                    .col(
                        ColumnDef::new(AdoptionRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AdoptionRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Requests are looked up by pet when reviewing applicants
        manager
            .create_index(
                Index::create()
                    .name("idx_adoption_requests_pet")
                    .table(AdoptionRequests::Table)
                    .col(AdoptionRequests::PetId)
                    .col(AdoptionRequests::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdoptionRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdoptionRequests {
    Table,
    Id,
    UserId,
    PetId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
