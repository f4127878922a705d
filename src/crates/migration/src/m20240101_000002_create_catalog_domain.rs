use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create artists table
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .col(ColumnDef::new(Artists::Bio).text().null())
                    .col(ColumnDef::new(Artists::Country).string().null())
                    .col(ColumnDef::new(Artists::Genre).string().null())
                    .col(ColumnDef::new(Artists::FormedYear).integer().null())
                    .col(
                        ColumnDef::new(Artists::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Artists::Label).string().null())
                    .col(ColumnDef::new(Artists::Photo).string().null())
                    .to_owned(),
            )
            .await?;

        // Create audiotracks table
        manager
            .create_table(
                Table::create()
                    .table(Audiotracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Audiotracks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Audiotracks::Title).string().not_null())
                    .col(ColumnDef::new(Audiotracks::Artist).string().not_null())
                    .col(ColumnDef::new(Audiotracks::Album).string().null())
                    .col(ColumnDef::new(Audiotracks::Duration).integer().not_null())
                    .col(ColumnDef::new(Audiotracks::Genre).string().null())
                    .col(
                        ColumnDef::new(Audiotracks::PlayCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Audiotracks::ReleaseYear).integer().null())
                    .col(ColumnDef::new(Audiotracks::Photo).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Audiotracks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Artists {
    Table,
    Id,
    Name,
    Bio,
    Country,
    Genre,
    FormedYear,
    IsActive,
    Label,
    Photo,
}

#[derive(DeriveIden)]
enum Audiotracks {
    Table,
    Id,
    Title,
    Artist,
    Album,
    Duration,
    Genre,
    PlayCount,
    ReleaseYear,
    Photo,
}
