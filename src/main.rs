/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use teamboard_core::types::Cli;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    tracing::info!("Starting Teamboard Server on {}:{}", cli.ip, cli.port);

    let state = teamboard_core::init_state(cli).await?;
    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
