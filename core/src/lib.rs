/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod access;
pub mod consts;
pub mod database;
pub mod input;
pub mod types;

use anyhow::{ensure, Result};
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    let jwt_secret = load_secret(&cli.jwt_secret_file);
    ensure!(
        !jwt_secret.is_empty(),
        "JWT secret file {} is empty or unreadable",
        cli.jwt_secret_file
    );

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        jwt_secret,
        cli,
    }))
}
