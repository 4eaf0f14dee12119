//! Row-level persistence for each contract entity
//!
//! Loading is always eager: a menu comes back with its submenus and every
//! submenu with its dishes. Nested rows are fetched in batches with
//! `LoaderTrait::load_many`, one query per level.
//!
//! Saving only writes the entity's own row; children have their own
//! repositories.

use super::entity::{dish, menu, submenu};
use super::mapper::{menu_from_rows, submenu_from_rows};
use crate::contract::{Dish, Entity, Menu, Submenu};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, LoaderTrait, QueryOrder, Select};
use uuid::Uuid;

/// Storage operations the generic repository is built from
#[async_trait]
pub trait Persisted: Entity<Id = Uuid> {
    /// Load one entity with its nested collections
    async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Self>>;

    /// Load every entity of this kind in insertion order
    async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Self>>;

    /// Insert the row, or update it when the identifier already exists
    async fn store<C: ConnectionTrait>(conn: &C, entity: &Self) -> Result<()>;

    /// Delete the row by identifier
    async fn remove<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<()>;
}

fn ordered_submenus() -> Select<submenu::Entity> {
    submenu::Entity::find()
        .order_by_asc(submenu::Column::CreatedAt)
        .order_by_asc(submenu::Column::Id)
}

fn ordered_dishes() -> Select<dish::Entity> {
    dish::Entity::find()
        .order_by_asc(dish::Column::CreatedAt)
        .order_by_asc(dish::Column::Id)
}

async fn assemble_submenus<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<submenu::Model>,
) -> Result<Vec<Submenu>> {
    let dishes = rows.load_many(ordered_dishes(), conn).await?;

    Ok(rows
        .into_iter()
        .zip(dishes)
        .map(|(row, dishes)| submenu_from_rows(row, dishes))
        .collect())
}

async fn assemble_menus<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<menu::Model>,
) -> Result<Vec<Menu>> {
    let grouped = rows.load_many(ordered_submenus(), conn).await?;
    let sizes: Vec<usize> = grouped.iter().map(Vec::len).collect();

    // One dish query for all submenus of all menus
    let mut submenus = assemble_submenus(conn, grouped.into_iter().flatten().collect())
        .await?
        .into_iter();

    Ok(rows
        .into_iter()
        .zip(sizes)
        .map(|(row, size)| menu_from_rows(row, submenus.by_ref().take(size).collect()))
        .collect())
}

// ===== Menu =====

#[async_trait]
impl Persisted for Menu {
    async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Self>> {
        let Some(row) = menu::Entity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };
        Ok(assemble_menus(conn, vec![row]).await?.pop())
    }

    async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Self>> {
        let rows = menu::Entity::find()
            .order_by_asc(menu::Column::CreatedAt)
            .order_by_asc(menu::Column::Id)
            .all(conn)
            .await?;
        assemble_menus(conn, rows).await
    }

    async fn store<C: ConnectionTrait>(conn: &C, entity: &Self) -> Result<()> {
        let active: menu::ActiveModel = entity.into();
        if menu::Entity::find_by_id(entity.id).one(conn).await?.is_some() {
            menu::Entity::update(active).exec(conn).await?;
        } else {
            menu::Entity::insert(active)
                .exec_without_returning(conn)
                .await?;
        }
        Ok(())
    }

    async fn remove<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<()> {
        menu::Entity::delete_by_id(id).exec(conn).await?;
        Ok(())
    }
}

// ===== Submenu =====

#[async_trait]
impl Persisted for Submenu {
    async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Self>> {
        let Some(row) = submenu::Entity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };
        Ok(assemble_submenus(conn, vec![row]).await?.pop())
    }

    async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Self>> {
        let rows = ordered_submenus().all(conn).await?;
        assemble_submenus(conn, rows).await
    }

    async fn store<C: ConnectionTrait>(conn: &C, entity: &Self) -> Result<()> {
        let active: submenu::ActiveModel = entity.into();
        if submenu::Entity::find_by_id(entity.id).one(conn).await?.is_some() {
            submenu::Entity::update(active).exec(conn).await?;
        } else {
            submenu::Entity::insert(active)
                .exec_without_returning(conn)
                .await?;
        }
        Ok(())
    }

    async fn remove<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<()> {
        submenu::Entity::delete_by_id(id).exec(conn).await?;
        Ok(())
    }
}

// ===== Dish =====

#[async_trait]
impl Persisted for Dish {
    async fn load<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Self>> {
        let row = dish::Entity::find_by_id(id).one(conn).await?;
        Ok(row.map(Dish::from))
    }

    async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Self>> {
        let rows = ordered_dishes().all(conn).await?;
        Ok(rows.into_iter().map(Dish::from).collect())
    }

    async fn store<C: ConnectionTrait>(conn: &C, entity: &Self) -> Result<()> {
        let active: dish::ActiveModel = entity.into();
        if dish::Entity::find_by_id(entity.id).one(conn).await?.is_some() {
            dish::Entity::update(active).exec(conn).await?;
        } else {
            dish::Entity::insert(active)
                .exec_without_returning(conn)
                .await?;
        }
        Ok(())
    }

    async fn remove<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<()> {
        dish::Entity::delete_by_id(id).exec(conn).await?;
        Ok(())
    }
}
