use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::audit::audit_middleware;
use crate::middleware::role::{require_admin, require_super_admin};
use crate::modules::auth::router::init_auth_router;
use crate::modules::branches::router::init_branches_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::fees::router::{init_fee_types_router, init_fees_router};
use crate::modules::roles::router::{init_role_groups_router, init_roles_router};
use crate::modules::sections::router::init_sections_router;
use crate::modules::students::router::init_students_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

/// Assemble the application router.
///
/// Guard placement: `/api/auth` is public with a stricter rate limit, the
/// resource routes require the admin role, and roles/role-groups require
/// super admin. The audit layer wraps the whole `/api` tree so rejected
/// requests are recorded too.
pub fn init_router(state: AppState) -> Router {
    let auth_governor = Arc::new(state.rate_limit_config.auth_governor_config());
    let general_governor = Arc::new(state.rate_limit_config.general_governor_config());

    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/auth",
                    init_auth_router().layer(GovernorLayer::new(auth_governor)),
                )
                .nest(
                    "/users",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/students",
                    init_students_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/classes",
                    init_classes_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/sections",
                    init_sections_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/branches",
                    init_branches_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/fees",
                    init_fees_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/fee-types",
                    init_fee_types_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/roles",
                    init_roles_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_super_admin,
                    )),
                )
                .nest(
                    "/role-groups",
                    init_role_groups_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_super_admin,
                    )),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    audit_middleware,
                ))
                .layer(GovernorLayer::new(general_governor)),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
