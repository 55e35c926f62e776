use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_foodgram_user::FoodgramUser;

static IDX_FOLLOW_AUTHOR_ID: &str = "idx-follow-author_id";
static FK_FOLLOW_USER_ID: &str = "fk-follow-user_id";
static FK_FOLLOW_AUTHOR_ID: &str = "fk-follow-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(integer(Follow::UserId))
                    .col(integer(Follow::AuthorId))
                    .col(timestamp(Follow::CreatedAt))
                    .primary_key(Index::create().col(Follow::UserId).col(Follow::AuthorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FOLLOW_USER_ID)
                            .from(Follow::Table, Follow::UserId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FOLLOW_AUTHOR_ID)
                            .from(Follow::Table, Follow::AuthorId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOLLOW_AUTHOR_ID)
                    .table(Follow::Table)
                    .col(Follow::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOLLOW_AUTHOR_ID)
                    .table(Follow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Follow {
    Table,
    UserId,
    AuthorId,
    CreatedAt,
}
