/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Session resolution. The session is a signed JWT carried in an HttpOnly
//! cookie; the middleware resolves it to the user record and hands that to
//! handlers through request extensions. Identity is never kept in
//! process-wide state.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use teamboard_core::consts::SESSION_COOKIE;
use teamboard_core::types::*;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

pub fn encode_jwt(state: &ServerState, id: Uuid) -> anyhow::Result<String> {
    let now = Utc::now();
    let expire = Duration::hours(state.cli.session_ttl_hours);
    let exp = (now + expire).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = Claims { exp, iat, id };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to encode session token: {}", e))
}

pub fn decode_jwt(state: &ServerState, token: &str) -> anyhow::Result<TokenData<Claims>> {
    decode(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to decode session token: {}", e))
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// The authenticated user id, if the request carries a valid session cookie.
/// Does not touch the database; used by the public pages to bounce
/// already-logged-in visitors back to the index.
pub fn session_user_id(state: &ServerState, jar: &CookieJar) -> Option<Uuid> {
    let token = jar.get(SESSION_COOKIE)?;
    decode_jwt(state, token.value())
        .ok()
        .map(|data| data.claims.id)
}

/// Route-layer middleware for every session-scoped route. A missing or
/// invalid session redirects to the login page without touching any data.
pub async fn authorize(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let jar = CookieJar::from_headers(req.headers());

    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(WebError::Unauthenticated)?;

    let token_data = decode_jwt(&state, &token).map_err(|_| WebError::Unauthenticated)?;

    let session_user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or(WebError::Unauthenticated)?;

    req.extensions_mut().insert(session_user);
    Ok(next.run(req).await)
}
