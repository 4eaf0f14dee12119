//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::CafeteriaError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: CafeteriaError) -> Problem {
    let detail = error.kind_message();

    match error {
        CafeteriaError::MenuNotFound { menu_id } => {
            Problem::new(StatusCode::NOT_FOUND, "Menu Not Found")
                .with_detail(detail)
                .with_instance(format!("/menus/{menu_id}"))
        }

        CafeteriaError::SubmenuNotFound { submenu_id } => {
            Problem::new(StatusCode::NOT_FOUND, "Submenu Not Found")
                .with_detail(detail)
                .with_instance(format!("/submenus/{submenu_id}"))
        }

        CafeteriaError::DishNotFound { dish_id } => {
            Problem::new(StatusCode::NOT_FOUND, "Dish Not Found")
                .with_detail(detail)
                .with_instance(format!("/dishes/{dish_id}"))
        }

        CafeteriaError::SubmenuNotIncludedInMenu {
            menu_id,
            submenu_id,
        } => Problem::new(StatusCode::BAD_REQUEST, "Submenu Not Included In Menu")
            .with_detail(detail)
            .with_instance(format!("/menus/{menu_id}/submenus/{submenu_id}")),

        CafeteriaError::Storage(source) => {
            tracing::error!("Storage error: {:?}", source);
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
