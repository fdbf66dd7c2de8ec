use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_class, delete_class, get_class_by_id, get_classes, update_class};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes).post(create_class))
        .route(
            "/{id}",
            get(get_class_by_id).put(update_class).delete(delete_class),
        )
}
