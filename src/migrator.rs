use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories_table::Migration),
            Box::new(m20240101_000002_create_subcategories_table::Migration),
            Box::new(m20240101_000003_create_items_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_categories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Categories::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Categories::Image).string().not_null())
                        .col(ColumnDef::new(Categories::Description).text().not_null())
                        .col(
                            ColumnDef::new(Categories::TaxApplicable)
                                .boolean()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Categories::Tax).decimal().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Categories {
        Table,
        Id,
        Name,
        Image,
        Description,
        TaxApplicable,
        Tax,
    }
}

mod m20240101_000002_create_subcategories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_subcategories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // parent_id is a plain reference column; parent existence is
            // checked by the service at creation time and nothing cascades.
            manager
                .create_table(
                    Table::create()
                        .table(SubCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SubCategories::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubCategories::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(SubCategories::Image).string().not_null())
                        .col(
                            ColumnDef::new(SubCategories::Description)
                                .text()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubCategories::TaxApplicable)
                                .boolean()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SubCategories::Tax).decimal().null())
                        .col(ColumnDef::new(SubCategories::ParentId).uuid().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_subcategories_parent_id")
                        .table(SubCategories::Table)
                        .col(SubCategories::ParentId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SubCategories::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum SubCategories {
        #[iden = "subcategories"]
        Table,
        Id,
        Name,
        Image,
        Description,
        TaxApplicable,
        Tax,
        ParentId,
    }
}

mod m20240101_000003_create_items_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Items::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Items::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Items::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Items::Image).string().not_null())
                        .col(ColumnDef::new(Items::Description).text().not_null())
                        .col(ColumnDef::new(Items::TaxApplicable).boolean().not_null())
                        .col(ColumnDef::new(Items::Tax).decimal().null())
                        .col(ColumnDef::new(Items::BaseAmount).decimal().not_null())
                        .col(ColumnDef::new(Items::Discount).decimal().not_null())
                        .col(ColumnDef::new(Items::TotalAmount).decimal().not_null())
                        .col(ColumnDef::new(Items::CategoryId).uuid().null())
                        .col(ColumnDef::new(Items::SubcategoryId).uuid().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_items_category_id")
                        .table(Items::Table)
                        .col(Items::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_items_subcategory_id")
                        .table(Items::Table)
                        .col(Items::SubcategoryId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Items::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Items {
        Table,
        Id,
        Name,
        Image,
        Description,
        TaxApplicable,
        Tax,
        BaseAmount,
        Discount,
        TotalAmount,
        CategoryId,
        SubcategoryId,
    }
}
