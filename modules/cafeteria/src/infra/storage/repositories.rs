//! SeaORM repository implementations

use crate::contract::{Dish, Menu, Submenu};
use crate::domain::repository::{Repository, TransactionManager};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use super::persisted::Persisted;

pub type MenuRepository = SeaOrmRepository<Menu>;
pub type SubmenuRepository = SeaOrmRepository<Submenu>;
pub type DishRepository = SeaOrmRepository<Dish>;

// ===== Generic Repository =====

pub struct SeaOrmRepository<T> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Persisted> SeaOrmRepository<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Finish a transaction the repository opened for a single call
    async fn close<R>(&self, own: DatabaseTransaction, result: Result<R>) -> Result<R> {
        match result {
            Ok(value) => {
                own.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = own.rollback().await {
                    tracing::warn!(error = %rollback_err, "repository rollback failed");
                }
                Err(err)
            }
        }
    }
}

async fn store_and_reload<T: Persisted, C: ConnectionTrait>(conn: &C, entity: &T) -> Result<T> {
    T::store(conn, entity).await?;
    T::load(conn, entity.id())
        .await?
        .ok_or_else(|| anyhow!("row {} missing right after save", entity.id()))
}

#[async_trait]
impl<T: Persisted> Repository<T, DatabaseTransaction> for SeaOrmRepository<T> {
    async fn find(&self, id: Uuid, tx: Option<&DatabaseTransaction>) -> Result<Option<T>> {
        match tx {
            Some(tx) => T::load(tx, id).await,
            None => {
                let own = self.db.begin().await?;
                let result = T::load(&own, id).await;
                self.close(own, result).await
            }
        }
    }

    async fn find_all(&self, tx: Option<&DatabaseTransaction>) -> Result<Vec<T>> {
        match tx {
            Some(tx) => T::load_all(tx).await,
            None => {
                let own = self.db.begin().await?;
                let result = T::load_all(&own).await;
                self.close(own, result).await
            }
        }
    }

    async fn save(&self, entity: &T, tx: Option<&DatabaseTransaction>) -> Result<T> {
        match tx {
            Some(tx) => store_and_reload(tx, entity).await,
            None => {
                let own = self.db.begin().await?;
                let result = store_and_reload(&own, entity).await;
                self.close(own, result).await
            }
        }
    }

    async fn delete(&self, entity: &T, tx: Option<&DatabaseTransaction>) -> Result<()> {
        match tx {
            Some(tx) => T::remove(tx, entity.id()).await,
            None => {
                let own = self.db.begin().await?;
                let result = T::remove(&own, entity.id()).await;
                self.close(own, result).await
            }
        }
    }
}

// ===== Transactions =====

pub struct SeaOrmTransactionManager {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTransactionManager {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionManager<DatabaseTransaction> for SeaOrmTransactionManager {
    async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.db.begin().await?)
    }

    async fn commit(&self, tx: DatabaseTransaction) -> Result<()> {
        Ok(tx.commit().await?)
    }

    async fn rollback(&self, tx: DatabaseTransaction) -> Result<()> {
        Ok(tx.rollback().await?)
    }
}
