//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules (and the REST layer) use to
//! interact with the cafeteria service. NO HTTP - direct function calls.

use super::{
    error::CafeteriaError,
    model::{
        Dish, DishCorrection, MenuCorrection, MenuSummary, NewDish, NewMenu, NewSubmenu,
        SubmenuCorrection, SubmenuSummary,
    },
};
use async_trait::async_trait;
use uuid::Uuid;

/// Cafeteria service API
#[async_trait]
pub trait CafeteriaApi: Send + Sync {
    // ===== Menu Operations =====

    /// List all menus
    async fn list_menus(&self) -> Result<Vec<MenuSummary>, CafeteriaError>;

    /// Get a menu
    async fn get_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError>;

    /// Create a menu
    async fn create_menu(&self, menu: NewMenu) -> Result<MenuSummary, CafeteriaError>;

    /// Correct a menu
    async fn correct_menu(
        &self,
        menu_id: Uuid,
        correction: MenuCorrection,
    ) -> Result<MenuSummary, CafeteriaError>;

    /// Delete a menu together with its submenus and dishes
    async fn delete_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError>;

    // ===== Submenu Operations =====

    /// List submenus of a menu
    async fn list_submenus(&self, menu_id: Uuid) -> Result<Vec<SubmenuSummary>, CafeteriaError>;

    /// Get a submenu of a menu
    async fn get_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError>;

    /// Create a submenu in a menu
    async fn create_submenu(
        &self,
        menu_id: Uuid,
        submenu: NewSubmenu,
    ) -> Result<SubmenuSummary, CafeteriaError>;

    /// Correct a submenu of a menu
    async fn correct_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        correction: SubmenuCorrection,
    ) -> Result<SubmenuSummary, CafeteriaError>;

    /// Delete a submenu together with its dishes
    async fn delete_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError>;

    // ===== Dish Operations =====

    /// List dishes of a submenu
    async fn list_dishes(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<Vec<Dish>, CafeteriaError>;

    /// Get a dish of a submenu
    async fn get_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError>;

    /// Add a dish to a submenu
    async fn add_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish: NewDish,
    ) -> Result<Dish, CafeteriaError>;

    /// Correct a dish of a submenu
    async fn correct_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
        correction: DishCorrection,
    ) -> Result<Dish, CafeteriaError>;

    /// Remove a dish from a submenu
    async fn remove_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError>;
}
