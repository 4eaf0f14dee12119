//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Generic CRUD repository over one entity kind
///
/// Every operation takes an optional transaction handle `Tx`. With `None` the
/// repository runs the single operation in its own transaction and commits or
/// rolls it back before returning. With `Some(tx)` it works inside the
/// caller's transaction and never commits or rolls back.
///
/// Storage errors are returned as-is: no retry, no translation.
#[async_trait]
pub trait Repository<T: Entity, Tx: Send + Sync>: Send + Sync {
    /// Find an entity by identifier; `None` when no row matches
    async fn find(&self, id: T::Id, tx: Option<&Tx>) -> Result<Option<T>>;

    /// All entities of this kind, in insertion order
    async fn find_all(&self, tx: Option<&Tx>) -> Result<Vec<T>>;

    /// Insert or update, returning the entity reloaded from storage
    async fn save(&self, entity: &T, tx: Option<&Tx>) -> Result<T>;

    /// Delete the entity; dependents are removed by the store's cascade
    async fn delete(&self, entity: &T, tx: Option<&Tx>) -> Result<()>;
}

/// Opens and finishes transaction scopes
#[async_trait]
pub trait TransactionManager<Tx>: Send + Sync {
    async fn begin(&self) -> Result<Tx>;

    async fn commit(&self, tx: Tx) -> Result<()>;

    async fn rollback(&self, tx: Tx) -> Result<()>;
}
