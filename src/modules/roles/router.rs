use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_role, create_role_group, delete_role, delete_role_group, get_role_by_id,
    get_role_group_by_id, get_role_groups, get_roles, update_role, update_role_group,
};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles).post(create_role))
        .route(
            "/{id}",
            get(get_role_by_id).put(update_role).delete(delete_role),
        )
}

pub fn init_role_groups_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_role_groups).post(create_role_group))
        .route(
            "/{id}",
            get(get_role_group_by_id)
                .put(update_role_group)
                .delete(delete_role_group),
        )
}
