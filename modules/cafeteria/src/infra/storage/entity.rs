//! SeaORM entities for database tables

/// Menus table
pub mod menu {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "menus")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub title: String,
        pub description: String,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with submenus
        #[sea_orm(has_many = "super::submenu::Entity")]
        Submenus,
    }

    impl Related<super::submenu::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Submenus.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Submenus table
pub mod submenu {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "submenus")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub title: String,
        pub description: String,
        /// Owning menu (ON DELETE CASCADE)
        pub menu_id: Uuid,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::menu::Entity",
            from = "Column::MenuId",
            to = "super::menu::Column::Id",
            on_delete = "Cascade"
        )]
        Menu,
        /// One-to-many relationship with dishes
        #[sea_orm(has_many = "super::dish::Entity")]
        Dishes,
    }

    impl Related<super::menu::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Menu.def()
        }
    }

    impl Related<super::dish::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Dishes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Dishes table
pub mod dish {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "dishes")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub title: String,
        pub description: String,
        #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
        pub price: Decimal,
        /// Owning submenu (ON DELETE CASCADE)
        pub submenu_id: Uuid,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::submenu::Entity",
            from = "Column::SubmenuId",
            to = "super::submenu::Column::Id",
            on_delete = "Cascade"
        )]
        Submenu,
    }

    impl Related<super::submenu::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Submenu.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
