//! Contract models for cafeteria service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Anything persisted with a unique identifier
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type
    type Id: Copy + Eq + fmt::Display + Send + Sync + 'static;

    /// Identifier of this entity
    fn id(&self) -> Self::Id;
}

// ===== Entities =====

/// Top-level menu with its submenus loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Submenus in insertion order
    pub submenus: Vec<Submenu>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Total number of dishes across all submenus
    pub fn dishes_count(&self) -> usize {
        self.submenus.iter().map(Submenu::dishes_count).sum()
    }

    pub fn submenus_count(&self) -> usize {
        self.submenus.len()
    }

    /// Whether the submenu is a member of this menu's submenu collection
    pub fn includes(&self, submenu: &Submenu) -> bool {
        self.submenus.iter().any(|s| s.id == submenu.id)
    }
}

impl Entity for Menu {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Submenu owned by a menu, with its dishes loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Owning menu, fixed at creation
    pub menu_id: Uuid,
    /// Dishes in insertion order
    pub dishes: Vec<Dish>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submenu {
    pub fn dishes_count(&self) -> usize {
        self.dishes.len()
    }
}

impl Entity for Submenu {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Dish owned by a submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Fixed-point price with two fractional digits
    pub price: Decimal,
    /// Owning submenu, fixed at creation
    pub submenu_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Dish {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

// ===== Read models =====

/// Menu as returned to callers, with derived counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub dishes_count: usize,
    pub submenus_count: usize,
}

impl From<&Menu> for MenuSummary {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id,
            title: menu.title.clone(),
            description: menu.description.clone(),
            dishes_count: menu.dishes_count(),
            submenus_count: menu.submenus_count(),
        }
    }
}

/// Submenu as returned to callers, with derived counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub dishes_count: usize,
}

impl From<&Submenu> for SubmenuSummary {
    fn from(submenu: &Submenu) -> Self {
        Self {
            id: submenu.id,
            title: submenu.title.clone(),
            description: submenu.description.clone(),
            dishes_count: submenu.dishes_count(),
        }
    }
}

// ===== Write models =====

/// Fields for a new menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    pub title: String,
    pub description: String,
}

/// Fields for a new submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmenu {
    pub title: String,
    pub description: String,
}

/// Fields for a new dish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDish {
    pub title: String,
    pub description: String,
    pub price: Decimal,
}

/// Menu correction; empty values keep the current field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCorrection {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Submenu correction; empty values keep the current field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmenuCorrection {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Dish correction; empty strings and zero price keep the current field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishCorrection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}
