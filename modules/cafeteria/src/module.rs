//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::CafeteriaApi;
use crate::domain::Service;
use crate::infra::storage::{
    DishRepository, MenuRepository, Migrator, SeaOrmTransactionManager, SubmenuRepository,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Build the domain service over SeaORM repositories sharing one connection pool
pub fn build_service(db: Arc<DatabaseConnection>) -> Service<DatabaseTransaction> {
    Service::new(
        Arc::new(SeaOrmTransactionManager::new(db.clone())),
        Arc::new(MenuRepository::new(db.clone())),
        Arc::new(SubmenuRepository::new(db.clone())),
        Arc::new(DishRepository::new(db)),
    )
}

/// Cafeteria module
///
/// Call [`CafeteriaModule::init`] once, then [`CafeteriaModule::register_rest`]
/// or [`CafeteriaModule::client`].
#[derive(Default)]
pub struct CafeteriaModule {
    client: RwLock<Option<Arc<dyn CafeteriaApi>>>,
}

impl CafeteriaModule {
    pub async fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        if cfg.run_migrations {
            self.migrate(&db).await?;
        } else {
            tracing::info!("Cafeteria migrations skipped by configuration");
        }

        // Build domain service
        let service = Arc::new(build_service(db));

        let client: Arc<dyn CafeteriaApi> = Arc::new(NativeClient::new(service));
        *self.client.write() = Some(client);

        tracing::info!("Cafeteria service initialized with native client");
        Ok(())
    }

    /// Apply all pending migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Cafeteria migrations completed");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn CafeteriaApi>> {
        self.client
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Cafeteria module not initialized"))
    }

    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let client = self.client()?;

        tracing::info!("Registering cafeteria REST routes");
        Ok(crate::api::rest::register_routes(router, client))
    }
}
