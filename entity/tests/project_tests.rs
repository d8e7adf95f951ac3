/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for project entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_project_entity_basic() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();
    let manager_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project::Model {
            id: project_id,
            manager: manager_id,
            name: "east-wing".to_owned(),
            description: "Renovation of the east wing".to_owned(),
            price: 2500.0,
            completed_jobs: "Scaffolding raised".to_owned(),
            start_date: naive_date,
            end_date: naive_date,
            archived: false,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = project::Entity::find_by_id(project_id).one(&db).await?;

    assert!(result.is_some());
    let project = result.unwrap();
    assert_eq!(project.name, "east-wing");
    assert_eq!(project.manager, manager_id);
    assert!(!project.archived);

    Ok(())
}

#[tokio::test]
async fn test_project_entity_archived_filter() -> Result<(), DbErr> {
    let manager_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let archived = project::Model {
        id: Uuid::new_v4(),
        manager: manager_id,
        name: "old-project".to_owned(),
        description: "Finished last year".to_owned(),
        price: 1000.0,
        completed_jobs: "Everything".to_owned(),
        start_date: naive_date,
        end_date: naive_date,
        archived: true,
        created_at: naive_date,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![archived.clone()]])
        .into_connection();

    let result = project::Entity::find()
        .filter(project::Column::Manager.eq(manager_id))
        .filter(project::Column::Archived.eq(true))
        .all(&db)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, archived.id);
    assert!(result[0].archived);

    Ok(())
}
