/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use teamboard_core::types::{Cli, ServerState};
use entity::{project, project_member, user};
use password_auth::generate_hash;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        session_ttl_hours: 24,
        disable_registration: false,
    }
}

pub fn create_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        jwt_secret: "integration-test-secret".to_string(),
        cli: create_mock_cli(),
    })
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn test_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::build_router(state)).expect("failed to start test server")
}

pub fn test_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn sample_user(name: &str, email: &str, password: &str) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password: generate_hash(password),
        created_at: test_date(),
    }
}

pub fn sample_project(manager: Uuid, name: &str, archived: bool) -> project::Model {
    project::Model {
        id: Uuid::new_v4(),
        manager,
        name: name.to_string(),
        description: "renovation of the east wing".to_string(),
        price: 2500.0,
        completed_jobs: String::new(),
        start_date: test_date(),
        end_date: test_date(),
        archived,
        created_at: test_date(),
    }
}

pub fn sample_team_entry(
    project: Uuid,
    member: &user::Model,
    position: i32,
) -> project_member::Model {
    project_member::Model {
        id: Uuid::new_v4(),
        project,
        member: member.id,
        member_name: member.name.clone(),
        position,
    }
}

/// Cookie header value for an authenticated session of the given user.
pub fn session_cookie_for(state: &ServerState, user_id: Uuid) -> String {
    let token = web::authorization::encode_jwt(state, user_id).expect("failed to encode token");
    format!("{}={}", teamboard_core::consts::SESSION_COOKIE, token)
}
