/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, removal_cookie, session_cookie, session_user_id};
use crate::error::{WebError, WebResult};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use teamboard_core::database::get_user_by_email;
use teamboard_core::input::validate_display_name;
use teamboard_core::types::*;
use email_address::EmailAddress;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn get_register(state: State<Arc<ServerState>>, jar: CookieJar) -> Response {
    if session_user_id(&state, &jar).is_some() {
        return Redirect::to("/").into_response();
    }

    StatusCode::OK.into_response()
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Form(body): Form<RegisterForm>,
) -> WebResult<Redirect> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = validate_display_name(&body.name) {
        return Err(WebError::BadRequest(format!("Invalid name: {}", e)));
    }

    if !EmailAddress::is_valid(&body.email) {
        return Err(WebError::invalid_email());
    }

    let existing_user = get_user_by_email(state.0.clone(), &body.email).await?;

    if existing_user.is_some() {
        return Err(WebError::email_taken());
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        email: Set(body.email.clone()),
        password: Set(generate_hash(&body.password)),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;
    tracing::info!("User registered: {}", user.id);

    Ok(Redirect::to("/login"))
}

pub async fn get_login(state: State<Arc<ServerState>>, jar: CookieJar) -> Response {
    if session_user_id(&state, &jar).is_some() {
        return Redirect::to("/").into_response();
    }

    StatusCode::OK.into_response()
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    jar: CookieJar,
    Form(body): Form<LoginForm>,
) -> WebResult<(CookieJar, Redirect)> {
    let user = get_user_by_email(state.0.clone(), &body.email)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    verify_password(&body.password, &user.password)
        .map_err(|_| WebError::wrong_credentials())?;

    let token = encode_jwt(&state, user.id)?;
    tracing::info!("User logged in: {}", user.id);

    Ok((jar.add(session_cookie(token)), Redirect::to("/")))
}

pub async fn get_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(removal_cookie()), Redirect::to("/login"))
}
