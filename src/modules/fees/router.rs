use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_fee, create_fee_type, delete_fee, delete_fee_type, get_fee_by_id, get_fee_type_by_id,
    get_fee_types, get_fees, update_fee, update_fee_type,
};

pub fn init_fees_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_fees).post(create_fee))
        .route(
            "/{id}",
            get(get_fee_by_id).put(update_fee).delete(delete_fee),
        )
}

pub fn init_fee_types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_fee_types).post(create_fee_type))
        .route(
            "/{id}",
            get(get_fee_type_by_id)
                .put(update_fee_type)
                .delete(delete_fee_type),
        )
}
