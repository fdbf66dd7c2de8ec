use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_branch, delete_branch, get_branch_by_id, get_branches, update_branch,
};

pub fn init_branches_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_branches).post(create_branch))
        .route(
            "/{id}",
            get(get_branch_by_id)
                .put(update_branch)
                .delete(delete_branch),
        )
}
