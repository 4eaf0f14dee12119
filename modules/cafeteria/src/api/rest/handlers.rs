//! HTTP request handlers - thin layer that delegates to the native client

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::CafeteriaApi;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

/// Client shared with every handler through a request extension
pub type ApiClient = Arc<dyn CafeteriaApi>;

// ===== Menu Handlers =====

/// List all menus
#[utoipa::path(
    get,
    path = "/api/v1/menus",
    tag = "menus",
    responses((status = 200, body = [MenuDto]))
)]
pub async fn list_menus(
    Extension(api): Extension<ApiClient>,
) -> Result<Json<Vec<MenuDto>>, Problem> {
    let menus = api.list_menus().await.map_err(map_domain_error)?;
    Ok(Json(menus.into_iter().map(MenuDto::from).collect()))
}

/// Get a menu
#[utoipa::path(
    get,
    path = "/api/v1/menus/{menu_id}",
    tag = "menus",
    params(("menu_id" = Uuid, Path, description = "Menu identifier")),
    responses(
        (status = 200, body = MenuDto),
        (status = 404, body = Problem)
    )
)]
pub async fn get_menu(
    Extension(api): Extension<ApiClient>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<MenuDto>, Problem> {
    let menu = api.get_menu(menu_id).await.map_err(map_domain_error)?;
    Ok(Json(menu.into()))
}

/// Create a menu
#[utoipa::path(
    post,
    path = "/api/v1/menus",
    tag = "menus",
    request_body = CreateMenuRequest,
    responses((status = 201, body = MenuDto))
)]
pub async fn create_menu(
    Extension(api): Extension<ApiClient>,
    Json(req): Json<CreateMenuRequest>,
) -> Result<(StatusCode, Json<MenuDto>), Problem> {
    let menu = api.create_menu(req.into()).await.map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(menu.into())))
}

/// Correct a menu
#[utoipa::path(
    patch,
    path = "/api/v1/menus/{menu_id}",
    tag = "menus",
    params(("menu_id" = Uuid, Path, description = "Menu identifier")),
    request_body = CorrectMenuRequest,
    responses(
        (status = 200, body = MenuDto),
        (status = 404, body = Problem)
    )
)]
pub async fn correct_menu(
    Extension(api): Extension<ApiClient>,
    Path(menu_id): Path<Uuid>,
    Json(req): Json<CorrectMenuRequest>,
) -> Result<Json<MenuDto>, Problem> {
    let menu = api
        .correct_menu(menu_id, req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(menu.into()))
}

/// Delete a menu with everything under it
#[utoipa::path(
    delete,
    path = "/api/v1/menus/{menu_id}",
    tag = "menus",
    params(("menu_id" = Uuid, Path, description = "Menu identifier")),
    responses(
        (status = 200, description = "The deleted menu", body = MenuDto),
        (status = 404, body = Problem)
    )
)]
pub async fn delete_menu(
    Extension(api): Extension<ApiClient>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<MenuDto>, Problem> {
    let menu = api.delete_menu(menu_id).await.map_err(map_domain_error)?;
    Ok(Json(menu.into()))
}

// ===== Submenu Handlers =====

/// List the submenus of a menu
#[utoipa::path(
    get,
    path = "/api/v1/menus/{menu_id}/submenus",
    tag = "submenus",
    params(("menu_id" = Uuid, Path, description = "Menu identifier")),
    responses(
        (status = 200, body = [SubmenuDto]),
        (status = 404, body = Problem)
    )
)]
pub async fn list_submenus(
    Extension(api): Extension<ApiClient>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<Vec<SubmenuDto>>, Problem> {
    let submenus = api.list_submenus(menu_id).await.map_err(map_domain_error)?;
    Ok(Json(submenus.into_iter().map(SubmenuDto::from).collect()))
}

/// Get a submenu
#[utoipa::path(
    get,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}",
    tag = "submenus",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier")
    ),
    responses(
        (status = 200, body = SubmenuDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn get_submenu(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SubmenuDto>, Problem> {
    let submenu = api
        .get_submenu(menu_id, submenu_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(submenu.into()))
}

/// Create a submenu in a menu
#[utoipa::path(
    post,
    path = "/api/v1/menus/{menu_id}/submenus",
    tag = "submenus",
    params(("menu_id" = Uuid, Path, description = "Menu identifier")),
    request_body = CreateSubmenuRequest,
    responses(
        (status = 201, body = SubmenuDto),
        (status = 404, body = Problem)
    )
)]
pub async fn create_submenu(
    Extension(api): Extension<ApiClient>,
    Path(menu_id): Path<Uuid>,
    Json(req): Json<CreateSubmenuRequest>,
) -> Result<(StatusCode, Json<SubmenuDto>), Problem> {
    let submenu = api
        .create_submenu(menu_id, req.into())
        .await
        .map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(submenu.into())))
}

/// Correct a submenu
#[utoipa::path(
    patch,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}",
    tag = "submenus",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier")
    ),
    request_body = CorrectSubmenuRequest,
    responses(
        (status = 200, body = SubmenuDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn correct_submenu(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CorrectSubmenuRequest>,
) -> Result<Json<SubmenuDto>, Problem> {
    let submenu = api
        .correct_submenu(menu_id, submenu_id, req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(submenu.into()))
}

/// Delete a submenu with its dishes
#[utoipa::path(
    delete,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}",
    tag = "submenus",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier")
    ),
    responses(
        (status = 200, description = "The deleted submenu", body = SubmenuDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn delete_submenu(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SubmenuDto>, Problem> {
    let submenu = api
        .delete_submenu(menu_id, submenu_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(submenu.into()))
}

// ===== Dish Handlers =====

/// List the dishes of a submenu
///
/// An unknown submenu yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes",
    tag = "dishes",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier")
    ),
    responses(
        (status = 200, body = [DishDto]),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn list_dishes(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<DishDto>>, Problem> {
    let dishes = api
        .list_dishes(menu_id, submenu_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(dishes.into_iter().map(DishDto::from).collect()))
}

/// Get a dish
#[utoipa::path(
    get,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
    tag = "dishes",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier"),
        ("dish_id" = Uuid, Path, description = "Dish identifier")
    ),
    responses(
        (status = 200, body = DishDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn get_dish(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DishDto>, Problem> {
    let dish = api
        .get_dish(menu_id, submenu_id, dish_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(dish.into()))
}

/// Add a dish to a submenu
#[utoipa::path(
    post,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes",
    tag = "dishes",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier")
    ),
    request_body = CreateDishRequest,
    responses(
        (status = 201, body = DishDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn add_dish(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CreateDishRequest>,
) -> Result<(StatusCode, Json<DishDto>), Problem> {
    let dish = api
        .add_dish(menu_id, submenu_id, req.into())
        .await
        .map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(dish.into())))
}

/// Correct a dish
#[utoipa::path(
    patch,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
    tag = "dishes",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier"),
        ("dish_id" = Uuid, Path, description = "Dish identifier")
    ),
    request_body = CorrectDishRequest,
    responses(
        (status = 200, body = DishDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn correct_dish(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(req): Json<CorrectDishRequest>,
) -> Result<Json<DishDto>, Problem> {
    let dish = api
        .correct_dish(menu_id, submenu_id, dish_id, req.into())
        .await
        .map_err(map_domain_error)?;
    Ok(Json(dish.into()))
}

/// Remove a dish
#[utoipa::path(
    delete,
    path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
    tag = "dishes",
    params(
        ("menu_id" = Uuid, Path, description = "Menu identifier"),
        ("submenu_id" = Uuid, Path, description = "Submenu identifier"),
        ("dish_id" = Uuid, Path, description = "Dish identifier")
    ),
    responses(
        (status = 200, description = "The removed dish", body = DishDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem)
    )
)]
pub async fn remove_dish(
    Extension(api): Extension<ApiClient>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DishDto>, Problem> {
    let dish = api
        .remove_dish(menu_id, submenu_id, dish_id)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(dish.into()))
}
