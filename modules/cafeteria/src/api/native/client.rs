//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CafeteriaApi, CafeteriaError, Dish, DishCorrection, MenuCorrection, MenuSummary, NewDish,
    NewMenu, NewSubmenu, SubmenuCorrection, SubmenuSummary,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// The REST layer talks to the service only through this client.
pub struct NativeClient<Tx: Send + Sync + 'static> {
    service: Arc<Service<Tx>>,
}

impl<Tx: Send + Sync + 'static> NativeClient<Tx> {
    /// Create a new native client
    pub fn new(service: Arc<Service<Tx>>) -> Self {
        Self { service }
    }
}

impl<Tx: Send + Sync + 'static> Clone for NativeClient<Tx> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

#[async_trait]
impl<Tx: Send + Sync + 'static> CafeteriaApi for NativeClient<Tx> {
    async fn list_menus(&self) -> Result<Vec<MenuSummary>, CafeteriaError> {
        self.service.list_menus().await
    }

    async fn get_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError> {
        self.service.get_menu(menu_id).await
    }

    async fn create_menu(&self, menu: NewMenu) -> Result<MenuSummary, CafeteriaError> {
        self.service.create_menu(menu).await
    }

    async fn correct_menu(
        &self,
        menu_id: Uuid,
        correction: MenuCorrection,
    ) -> Result<MenuSummary, CafeteriaError> {
        self.service.correct_menu(menu_id, correction).await
    }

    async fn delete_menu(&self, menu_id: Uuid) -> Result<MenuSummary, CafeteriaError> {
        self.service.delete_menu(menu_id).await
    }

    async fn list_submenus(&self, menu_id: Uuid) -> Result<Vec<SubmenuSummary>, CafeteriaError> {
        self.service.list_submenus(menu_id).await
    }

    async fn get_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        self.service.get_submenu(menu_id, submenu_id).await
    }

    async fn create_submenu(
        &self,
        menu_id: Uuid,
        submenu: NewSubmenu,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        self.service.create_submenu(menu_id, submenu).await
    }

    async fn correct_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        correction: SubmenuCorrection,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        self.service
            .correct_submenu(menu_id, submenu_id, correction)
            .await
    }

    async fn delete_submenu(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<SubmenuSummary, CafeteriaError> {
        self.service.delete_submenu(menu_id, submenu_id).await
    }

    async fn list_dishes(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
    ) -> Result<Vec<Dish>, CafeteriaError> {
        self.service.list_dishes(menu_id, submenu_id).await
    }

    async fn get_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError> {
        self.service.get_dish(menu_id, submenu_id, dish_id).await
    }

    async fn add_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish: NewDish,
    ) -> Result<Dish, CafeteriaError> {
        self.service.add_dish(menu_id, submenu_id, dish).await
    }

    async fn correct_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
        correction: DishCorrection,
    ) -> Result<Dish, CafeteriaError> {
        self.service
            .correct_dish(menu_id, submenu_id, dish_id, correction)
            .await
    }

    async fn remove_dish(
        &self,
        menu_id: Uuid,
        submenu_id: Uuid,
        dish_id: Uuid,
    ) -> Result<Dish, CafeteriaError> {
        self.service.remove_dish(menu_id, submenu_id, dish_id).await
    }
}
