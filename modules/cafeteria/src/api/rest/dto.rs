//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Menu DTOs =====

/// Menu response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub id: Uuid,

    #[schema(example = "Lunch")]
    pub title: String,

    #[schema(example = "Served from noon to three")]
    pub description: String,

    /// Dishes across all submenus of the menu
    pub dishes_count: usize,

    pub submenus_count: usize,
}

/// Create menu request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMenuRequest {
    pub title: String,
    pub description: String,
}

/// Correct menu request
///
/// Omitted or empty fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CorrectMenuRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ===== Submenu DTOs =====

/// Submenu response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmenuDto {
    pub id: Uuid,

    #[schema(example = "Soups")]
    pub title: String,

    pub description: String,

    pub dishes_count: usize,
}

/// Create submenu request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSubmenuRequest {
    pub title: String,
    pub description: String,
}

/// Correct submenu request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CorrectSubmenuRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ===== Dish DTOs =====

/// Dish response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DishDto {
    pub id: Uuid,

    #[schema(example = "Borscht")]
    pub title: String,

    pub description: String,

    /// Price with two fractional digits, serialized as a string
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
}

/// Create dish request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDishRequest {
    pub title: String,
    pub description: String,

    /// Accepts a decimal string or a JSON number
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
}

/// Correct dish request
///
/// A zero price is treated like an omitted one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CorrectDishRequest {
    pub title: Option<String>,
    pub description: Option<String>,

    #[schema(value_type = Option<String>, example = "13.00")]
    pub price: Option<Decimal>,
}
