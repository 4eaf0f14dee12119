//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{dish, menu, submenu};
use crate::contract::{Dish, Menu, Submenu};

// ===== Dish Conversions =====

impl From<dish::Model> for Dish {
    fn from(entity: dish::Model) -> Self {
        // Some backends hand decimals back through a float
        let mut price = entity.price;
        price.rescale(2);

        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price,
            submenu_id: entity.submenu_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Dish> for dish::ActiveModel {
    fn from(model: &Dish) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            price: Set(model.price),
            submenu_id: Set(model.submenu_id),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Submenu Conversions =====

/// Build a submenu from its row and its dish rows
pub fn submenu_from_rows(entity: submenu::Model, dishes: Vec<dish::Model>) -> Submenu {
    Submenu {
        id: entity.id,
        title: entity.title,
        description: entity.description,
        menu_id: entity.menu_id,
        dishes: dishes.into_iter().map(Dish::from).collect(),
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

impl From<&Submenu> for submenu::ActiveModel {
    fn from(model: &Submenu) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            menu_id: Set(model.menu_id),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Menu Conversions =====

/// Build a menu from its row and its already assembled submenus
pub fn menu_from_rows(entity: menu::Model, submenus: Vec<Submenu>) -> Menu {
    Menu {
        id: entity.id,
        title: entity.title,
        description: entity.description,
        submenus,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

impl From<&Menu> for menu::ActiveModel {
    fn from(model: &Menu) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
