//! Route registration and the OpenAPI document

use super::{
    dto::*,
    error::Problem,
    handlers::{self, ApiClient},
};
use axum::{routing::get, Extension, Json, Router};
use utoipa::OpenApi;

/// Prefix every cafeteria route is nested under
pub const API_PREFIX: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    info(title = "Cafeteria API", description = "Menus, submenus and dishes"),
    paths(
        handlers::list_menus,
        handlers::get_menu,
        handlers::create_menu,
        handlers::correct_menu,
        handlers::delete_menu,
        handlers::list_submenus,
        handlers::get_submenu,
        handlers::create_submenu,
        handlers::correct_submenu,
        handlers::delete_submenu,
        handlers::list_dishes,
        handlers::get_dish,
        handlers::add_dish,
        handlers::correct_dish,
        handlers::remove_dish,
    ),
    components(schemas(
        MenuDto,
        CreateMenuRequest,
        CorrectMenuRequest,
        SubmenuDto,
        CreateSubmenuRequest,
        CorrectSubmenuRequest,
        DishDto,
        CreateDishRequest,
        CorrectDishRequest,
        Problem,
    )),
    tags(
        (name = "menus", description = "Top-level menus"),
        (name = "submenus", description = "Submenus of a menu"),
        (name = "dishes", description = "Dishes of a submenu"),
    )
)]
pub struct ApiDoc;

/// Register all REST routes under [`API_PREFIX`]
pub fn register_routes(router: Router, api: ApiClient) -> Router {
    let v1 = Router::new()
        // Menu endpoints
        .route(
            "/menus",
            get(handlers::list_menus).post(handlers::create_menu),
        )
        .route(
            "/menus/{menu_id}",
            get(handlers::get_menu)
                .patch(handlers::correct_menu)
                .delete(handlers::delete_menu),
        )
        // Submenu endpoints
        .route(
            "/menus/{menu_id}/submenus",
            get(handlers::list_submenus).post(handlers::create_submenu),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}",
            get(handlers::get_submenu)
                .patch(handlers::correct_submenu)
                .delete(handlers::delete_submenu),
        )
        // Dish endpoints
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes",
            get(handlers::list_dishes).post(handlers::add_dish),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
            get(handlers::get_dish)
                .patch(handlers::correct_dish)
                .delete(handlers::remove_dish),
        )
        .route("/openapi.json", get(openapi_document))
        // Client as extension for handlers
        .layer(Extension(api));

    router.nest(API_PREFIX, v1)
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
