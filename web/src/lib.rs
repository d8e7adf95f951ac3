/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;


use axum::routing::{get, post};
use axum::{middleware, Router};
use teamboard_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(endpoints::projects::get_index))
        .route("/my-projects", get(endpoints::projects::get_my_projects))
        .route(
            "/part-of-projects",
            get(endpoints::projects::get_part_of_projects),
        )
        .route(
            "/add-project",
            get(endpoints::projects::get_add_project).post(endpoints::projects::post_add_project),
        )
        .route(
            "/edit-project/{id}",
            get(endpoints::projects::get_edit_project)
                .post(endpoints::projects::post_edit_project),
        )
        .route(
            "/edit-project-user/{id}",
            get(endpoints::projects::get_edit_project_user)
                .post(endpoints::projects::post_edit_project_user),
        )
        .route("/archive", get(endpoints::projects::get_archive))
        .route(
            "/delete-project/{id}",
            post(endpoints::projects::post_delete_project),
        )
        .route(
            "/add-team-member/{id}",
            get(endpoints::team::get_add_team_member)
                .post(endpoints::team::post_add_team_member),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route(
            "/register",
            get(endpoints::auth::get_register).post(endpoints::auth::post_register),
        )
        .route(
            "/login",
            get(endpoints::auth::get_login).post(endpoints::auth::post_login),
        )
        .route("/logout", get(endpoints::auth::get_logout))
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
