//! Cafeteria Module
//!
//! Menus hold submenus and submenus hold dishes. Every request names the full
//! path down to the object it touches, and the service checks that path
//! (menu, then submenu, then membership, then dish) before reading or
//! writing anything. Mutations run the check and the write in one transaction.

// Public exports
pub mod contract;
pub use contract::{
    client::CafeteriaApi, error::CafeteriaError, Dish, DishCorrection, Menu, MenuCorrection,
    MenuSummary, NewDish, NewMenu, NewSubmenu, Submenu, SubmenuCorrection, SubmenuSummary,
};

pub mod module;
pub use module::{build_service, CafeteriaModule};

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
