//! Contract error types for cafeteria service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use uuid::Uuid;

/// Cafeteria service domain errors
#[derive(Debug, thiserror::Error)]
pub enum CafeteriaError {
    /// Menu does not exist
    #[error("Menu with id {menu_id} not found")]
    MenuNotFound { menu_id: Uuid },

    /// Submenu does not exist
    #[error("Submenu with id {submenu_id} not found")]
    SubmenuNotFound { submenu_id: Uuid },

    /// Submenu exists but is not part of the addressed menu
    #[error("Submenu with id {submenu_id} is not included in menu with id {menu_id}")]
    SubmenuNotIncludedInMenu { menu_id: Uuid, submenu_id: Uuid },

    /// Dish does not exist in the addressed submenu
    #[error("Dish with id {dish_id} not found")]
    DishNotFound { dish_id: Uuid },

    /// Storage layer failure, passed through untouched
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl CafeteriaError {
    /// Short machine-facing message for the error kind
    pub fn kind_message(&self) -> &'static str {
        match self {
            Self::MenuNotFound { .. } => "menu not found",
            Self::SubmenuNotFound { .. } => "submenu not found",
            Self::SubmenuNotIncludedInMenu { .. } => "submenu not included in menu",
            Self::DishNotFound { .. } => "dish not found",
            Self::Storage(_) => "internal error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_identifiers() {
        let menu_id = Uuid::new_v4();
        let submenu_id = Uuid::new_v4();
        let err = CafeteriaError::SubmenuNotIncludedInMenu { menu_id, submenu_id };

        let text = err.to_string();
        assert!(text.contains(&menu_id.to_string()));
        assert!(text.contains(&submenu_id.to_string()));
        assert_eq!(err.kind_message(), "submenu not included in menu");
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: CafeteriaError = anyhow::anyhow!("connection reset").into();
        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(err.kind_message(), "internal error");
    }
}
