//! Domain service - business logic orchestration
//!
//! Every operation walks the containment chain before touching data:
//! menu exists, then submenu exists, then submenu is included in the menu,
//! then dish exists. The first failing step decides the error.
//!
//! Create, correct and delete run the whole chain and the write inside one
//! transaction. Reads go through the repositories without a service-level
//! transaction.

use super::correction::corrected;
use super::hierarchy::{ensure_included, ensure_owned};
use super::repository::{Repository, TransactionManager};
use crate::contract::{
    CafeteriaError, Dish, DishCorrection, Menu, MenuCorrection, MenuSummary, NewDish, NewMenu,
    NewSubmenu, Submenu, SubmenuCorrection, SubmenuSummary,
};
use chrono::Utc;
use std::mem;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for the menu hierarchy
///
/// `Tx` is the storage transaction handle shared by the repositories.
pub struct Service<Tx: Send + Sync + 'static> {
    transactions: Arc<dyn TransactionManager<Tx>>,
    menu_repo: Arc<dyn Repository<Menu, Tx>>,
    submenu_repo: Arc<dyn Repository<Submenu, Tx>>,
    dish_repo: Arc<dyn Repository<Dish, Tx>>,
}

impl<Tx: Send + Sync + 'static> Service<Tx> {
    /// Create a new service instance
    pub fn new(
        transactions: Arc<dyn TransactionManager<Tx>>,
        menu_repo: Arc<dyn Repository<Menu, Tx>>,
        submenu_repo: Arc<dyn Repository<Submenu, Tx>>,
        dish_repo: Arc<dyn Repository<Dish, Tx>>,
    ) -> Self {
        Self {
            transactions,
            menu_repo,
            submenu_repo,
            dish_repo,
        }
    }

    // ===== Menu Operations =====

    /// List all menus with their counters
    pub async fn list_menus(&self) -> Result<Vec<MenuSummary>, CafeteriaError> {
        let menus = self.menu_repo.find_all(None).await?;
        Ok(menus.iter().map(MenuSummary::from).collect())
    }

    /// Get a menu
    pub async fn get_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError> {
        let menu = self.require_menu(menu_id, None).await?;
        Ok(MenuSummary::from(&menu))
    }

    /// Create a menu
    pub async fn create_menu(&self, new_menu: NewMenu) -> Result<MenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let now = Utc::now();
            let menu = Menu {
                id: Uuid::new_v4(),
                title: new_menu.title,
                description: new_menu.description,
                submenus: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            let saved = self.menu_repo.save(&menu, Some(&tx)).await?;
            tracing::info!(menu_id = %saved.id, "menu created");
            Ok::<_, CafeteriaError>(MenuSummary::from(&saved))
        }
        .await;
        self.finish(tx, result).await
    }

    /// Correct a menu; blank fields keep their current value
    pub async fn correct_menu(
        &self,
        menu_id: Uuid,
        correction: MenuCorrection,
    ) -> Result<MenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let mut menu = self.require_menu(menu_id, Some(&tx)).await?;
            menu.title = corrected(mem::take(&mut menu.title), correction.title);
            menu.description = corrected(mem::take(&mut menu.description), correction.description);
            menu.updated_at = Utc::now();

            let saved = self.menu_repo.save(&menu, Some(&tx)).await?;
            tracing::debug!(%menu_id, "menu corrected");
            Ok::<_, CafeteriaError>(MenuSummary::from(&saved))
        }
        .await;
        self.finish(tx, result).await
    }

    /// Delete a menu; submenus and dishes go with it via cascade
    ///
    /// Returns the menu as it was right before deletion.
    pub async fn delete_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let menu = self.require_menu(menu_id, Some(&tx)).await?;
            self.menu_repo.delete(&menu, Some(&tx)).await?;
            tracing::info!(
                %menu_id,
                submenus = menu.submenus_count(),
                dishes = menu.dishes_count(),
                "menu deleted"
            );
            Ok::<_, CafeteriaError>(MenuSummary::from(&menu))
        }
        .await;
        self.finish(tx, result).await
    }

    // ===== Submenu Operations =====

    /// List the submenus of a menu
    pub async fn list_submenus(
        &self,
        menu_id: Uuid,
    ) -> Result<Vec<SubmenuSummary>, CafeteriaError> {
        let menu = self.require_menu(menu_id, None).await?;
        Ok(menu.submenus.iter().map(SubmenuSummary::from).collect())
    }

    /// Get a submenu of a menu
    pub async fn get_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        let (_, submenu) = self
            .require_submenu_in_menu(menu_id, submenu_id, None)
            .await?;
        Ok(SubmenuSummary::from(&submenu))
    }

    /// Create a submenu in a menu
    pub async fn create_submenu(
        &self,
        menu_id: Uuid,
        new_submenu: NewSubmenu,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let menu = self.require_menu(menu_id, Some(&tx)).await?;
            let now = Utc::now();
            let submenu = Submenu {
                id: Uuid::new_v4(),
                title: new_submenu.title,
                description: new_submenu.description,
                menu_id: menu.id,
                dishes: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            let saved = self.submenu_repo.save(&submenu, Some(&tx)).await?;
            tracing::info!(%menu_id, submenu_id = %saved.id, "submenu created");
            Ok::<_, CafeteriaError>(SubmenuSummary::from(&saved))
        }
        .await;
        self.finish(tx, result).await
    }

    /// Correct a submenu of a menu
    pub async fn correct_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        correction: SubmenuCorrection,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let (_, mut submenu) = self
                .require_submenu_in_menu(menu_id, submenu_id, Some(&tx))
                .await?;
            submenu.title = corrected(mem::take(&mut submenu.title), correction.title);
            submenu.description =
                corrected(mem::take(&mut submenu.description), correction.description);
            submenu.updated_at = Utc::now();

            let saved = self.submenu_repo.save(&submenu, Some(&tx)).await?;
            tracing::debug!(%menu_id, %submenu_id, "submenu corrected");
            Ok::<_, CafeteriaError>(SubmenuSummary::from(&saved))
        }
        .await;
        self.finish(tx, result).await
    }

    /// Delete a submenu; its dishes go with it via cascade
    pub async fn delete_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let (_, submenu) = self
                .require_submenu_in_menu(menu_id, submenu_id, Some(&tx))
                .await?;
            self.submenu_repo.delete(&submenu, Some(&tx)).await?;
            tracing::info!(
                %menu_id,
                %submenu_id,
                dishes = submenu.dishes_count(),
                "submenu deleted"
            );
            Ok::<_, CafeteriaError>(SubmenuSummary::from(&submenu))
        }
        .await;
        self.finish(tx, result).await
    }

    // ===== Dish Operations =====

    /// List the dishes of a submenu
    ///
    /// An unknown submenu yields an empty list rather than `SubmenuNotFound`,
    /// unlike [`Service::get_dish`]. The menu is still required to exist.
    pub async fn list_dishes(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<Vec<Dish>, CafeteriaError> {
        let menu = self.require_menu(menu_id, None).await?;
        let Some(submenu) = self.submenu_repo.find(submenu_id, None).await? else {
            tracing::debug!(%menu_id, %submenu_id, "listing dishes of unknown submenu");
            return Ok(Vec::new());
        };
        ensure_included(&menu, &submenu)?;
        Ok(submenu.dishes)
    }

    /// Get a dish of a submenu
    pub async fn get_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError> {
        self.require_dish(menu_id, submenu_id, dish_id, None).await
    }

    /// Add a dish to a submenu
    pub async fn add_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        new_dish: NewDish,
    ) -> Result<Dish, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let (_, submenu) = self
                .require_submenu_in_menu(menu_id, submenu_id, Some(&tx))
                .await?;
            let now = Utc::now();
            let dish = Dish {
                id: Uuid::new_v4(),
                title: new_dish.title,
                description: new_dish.description,
                price: new_dish.price,
                submenu_id: submenu.id,
                created_at: now,
                updated_at: now,
            };
            let saved = self.dish_repo.save(&dish, Some(&tx)).await?;
            tracing::info!(%menu_id, %submenu_id, dish_id = %saved.id, "dish added");
            Ok::<_, CafeteriaError>(saved)
        }
        .await;
        self.finish(tx, result).await
    }

    /// Correct a dish; empty strings and a zero price keep the current value
    pub async fn correct_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
        correction: DishCorrection,
    ) -> Result<Dish, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let mut dish = self
                .require_dish(menu_id, submenu_id, dish_id, Some(&tx))
                .await?;
            dish.title = corrected(mem::take(&mut dish.title), correction.title);
            dish.description = corrected(mem::take(&mut dish.description), correction.description);
            dish.price = corrected(dish.price, correction.price);
            dish.updated_at = Utc::now();

            let saved = self.dish_repo.save(&dish, Some(&tx)).await?;
            tracing::debug!(%menu_id, %submenu_id, %dish_id, "dish corrected");
            Ok::<_, CafeteriaError>(saved)
        }
        .await;
        self.finish(tx, result).await
    }

    /// Remove a dish from a submenu, returning the removed dish
    pub async fn remove_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError> {
        let tx = self.transactions.begin().await?;
        let result = async {
            let dish = self
                .require_dish(menu_id, submenu_id, dish_id, Some(&tx))
                .await?;
            self.dish_repo.delete(&dish, Some(&tx)).await?;
            tracing::info!(%menu_id, %submenu_id, %dish_id, "dish removed");
            Ok::<_, CafeteriaError>(dish)
        }
        .await;
        self.finish(tx, result).await
    }

    // ===== Containment Chain =====

    /// Step 1: the menu exists
    async fn require_menu(&self, menu_id: Uuid, tx: Option<&Tx>) -> Result<Menu, CafeteriaError> {
        self.menu_repo
            .find(menu_id, tx)
            .await?
            .ok_or(CafeteriaError::MenuNotFound { menu_id })
    }

    /// Steps 1-3: the menu exists, the submenu exists, the menu includes it
    async fn require_submenu_in_menu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        tx: Option<&Tx>,
    ) -> Result<(Menu, Submenu), CafeteriaError> {
        let menu = self.require_menu(menu_id, tx).await?;
        let submenu = self
            .submenu_repo
            .find(submenu_id, tx)
            .await?
            .ok_or(CafeteriaError::SubmenuNotFound { submenu_id })?;
        ensure_included(&menu, &submenu)?;
        Ok((menu, submenu))
    }

    /// Steps 1-4: the full chain down to a dish owned by the submenu
    async fn require_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
        tx: Option<&Tx>,
    ) -> Result<Dish, CafeteriaError> {
        let (_, submenu) = self
            .require_submenu_in_menu(menu_id, submenu_id, tx)
            .await?;
        let dish = self
            .dish_repo
            .find(dish_id, tx)
            .await?
            .ok_or(CafeteriaError::DishNotFound { dish_id })?;
        ensure_owned(&submenu, &dish)?;
        Ok(dish)
    }

    /// Commit on success, roll back on any failure
    async fn finish<R>(
        &self,
        tx: Tx,
        result: Result<R, CafeteriaError>,
    ) -> Result<R, CafeteriaError> {
        match result {
            Ok(value) => {
                self.transactions.commit(tx).await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.transactions.rollback(tx).await {
                    tracing::error!(error = %rollback_err, "transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}
