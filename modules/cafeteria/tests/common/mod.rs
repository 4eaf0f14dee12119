//! Common test utilities: in-memory database and a seeded menu tree
#![allow(dead_code)]

use cafeteria::domain::Service;
use cafeteria::infra::storage::Migrator;
use cafeteria::{build_service, Dish, MenuSummary, NewDish, NewMenu, NewSubmenu, SubmenuSummary};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

pub type SqlService = Service<DatabaseTransaction>;

/// Fresh in-memory SQLite database without schema
///
/// The pool holds exactly one connection so every query sees the same
/// in-memory database.
pub async fn open() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    Arc::new(db)
}

/// Fresh in-memory SQLite database with all migrations applied
pub async fn connect() -> Arc<DatabaseConnection> {
    let db = open().await;
    Migrator::up(&*db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Service over a fresh database, plus the connection for direct checks
pub async fn service() -> (Arc<DatabaseConnection>, SqlService) {
    let db = connect().await;
    let service = build_service(db.clone());
    (db, service)
}

/// Lunch menu with one soup submenu holding two dishes
pub struct Tree {
    pub menu: MenuSummary,
    pub submenu: SubmenuSummary,
    pub dishes: Vec<Dish>,
}

pub fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn new_menu(title: &str) -> NewMenu {
    NewMenu {
        title: title.to_string(),
        description: format!("{title} menu"),
    }
}

pub fn new_submenu(title: &str) -> NewSubmenu {
    NewSubmenu {
        title: title.to_string(),
        description: format!("{title} section"),
    }
}

pub fn new_dish(title: &str, cents: i64) -> NewDish {
    NewDish {
        title: title.to_string(),
        description: format!("{title}, house recipe"),
        price: price(cents),
    }
}

pub async fn seed(service: &SqlService) -> Tree {
    let menu = service
        .create_menu(new_menu("Lunch"))
        .await
        .expect("Failed to create menu");
    let submenu = service
        .create_submenu(menu.id, new_submenu("Soups"))
        .await
        .expect("Failed to create submenu");

    let mut dishes = Vec::new();
    for (title, cents) in [("Borscht", 1250), ("Solyanka", 900)] {
        let dish = service
            .add_dish(menu.id, submenu.id, new_dish(title, cents))
            .await
            .expect("Failed to add dish");
        dishes.push(dish);
    }

    Tree {
        menu,
        submenu,
        dishes,
    }
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
