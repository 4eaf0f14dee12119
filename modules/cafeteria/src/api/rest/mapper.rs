//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Menu conversions =====

impl From<contract::MenuSummary> for MenuDto {
    fn from(menu: contract::MenuSummary) -> Self {
        Self {
            id: menu.id,
            title: menu.title,
            description: menu.description,
            dishes_count: menu.dishes_count,
            submenus_count: menu.submenus_count,
        }
    }
}

impl From<CreateMenuRequest> for contract::NewMenu {
    fn from(req: CreateMenuRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}

impl From<CorrectMenuRequest> for contract::MenuCorrection {
    fn from(req: CorrectMenuRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}

// ===== Submenu conversions =====

impl From<contract::SubmenuSummary> for SubmenuDto {
    fn from(submenu: contract::SubmenuSummary) -> Self {
        Self {
            id: submenu.id,
            title: submenu.title,
            description: submenu.description,
            dishes_count: submenu.dishes_count,
        }
    }
}

impl From<CreateSubmenuRequest> for contract::NewSubmenu {
    fn from(req: CreateSubmenuRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}

impl From<CorrectSubmenuRequest> for contract::SubmenuCorrection {
    fn from(req: CorrectSubmenuRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}

// ===== Dish conversions =====

impl From<contract::Dish> for DishDto {
    fn from(dish: contract::Dish) -> Self {
        let mut price = dish.price;
        price.rescale(2);

        Self {
            id: dish.id,
            title: dish.title,
            description: dish.description,
            price,
        }
    }
}

impl From<CreateDishRequest> for contract::NewDish {
    fn from(req: CreateDishRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
        }
    }
}

impl From<CorrectDishRequest> for contract::DishCorrection {
    fn from(req: CorrectDishRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
        }
    }
}
