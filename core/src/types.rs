/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;

#[derive(Parser, Debug)]
#[command(name = "Teamboard", display_name = "Teamboard", bin_name = "teamboard-server", author = "Teamboard Contributors", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TEAMBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TEAMBOARD_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TEAMBOARD_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "TEAMBOARD_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TEAMBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "TEAMBOARD_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "TEAMBOARD_SESSION_TTL_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub session_ttl_hours: i64,
    #[arg(long, env = "TEAMBOARD_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cli: Cli,
}

pub type EProject = project::Entity;
pub type EProjectMember = project_member::Entity;
pub type EUser = user::Entity;

pub type MProject = project::Model;
pub type MProjectMember = project_member::Model;
pub type MUser = user::Model;

pub type AProject = project::ActiveModel;
pub type AProjectMember = project_member::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CProject = project::Column;
pub type CProjectMember = project_member::Column;
pub type CUser = user::Column;
