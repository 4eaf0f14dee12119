//! Containment rules for the Menu -> Submenu -> Dish hierarchy
//!
//! Pure checks over already-loaded entities. The service decides the order in
//! which they run; these functions only answer one question each.

use crate::contract::{CafeteriaError, Dish, Menu, Submenu};

/// Fail unless the submenu is a member of the menu's submenu collection
pub fn ensure_included(menu: &Menu, submenu: &Submenu) -> Result<(), CafeteriaError> {
    if menu.includes(submenu) {
        return Ok(());
    }

    tracing::warn!(
        menu_id = %menu.id,
        submenu_id = %submenu.id,
        "submenu is not included in menu"
    );
    Err(CafeteriaError::SubmenuNotIncludedInMenu {
        menu_id: menu.id,
        submenu_id: submenu.id,
    })
}

/// Fail unless the dish belongs to the submenu
///
/// A dish owned by another submenu is reported as not found.
pub fn ensure_owned(submenu: &Submenu, dish: &Dish) -> Result<(), CafeteriaError> {
    if dish.submenu_id == submenu.id {
        return Ok(());
    }

    tracing::warn!(
        submenu_id = %submenu.id,
        dish_id = %dish.id,
        owner_id = %dish.submenu_id,
        "dish belongs to another submenu"
    );
    Err(CafeteriaError::DishNotFound { dish_id: dish.id })
}
