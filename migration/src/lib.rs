/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250812_000100_create_table_user;
mod m20250812_000200_create_table_project;
mod m20250812_000300_create_table_project_member;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_000100_create_table_user::Migration),
            Box::new(m20250812_000200_create_table_project::Migration),
            Box::new(m20250812_000300_create_table_project_member::Migration),
        ]
    }
}
