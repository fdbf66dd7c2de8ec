use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_section, delete_section, get_section_by_id, get_sections, update_section,
};

pub fn init_sections_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sections).post(create_section))
        .route(
            "/{id}",
            get(get_section_by_id)
                .put(update_section)
                .delete(delete_section),
        )
}
