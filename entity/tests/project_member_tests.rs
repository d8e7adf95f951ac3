/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for project member entity

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, QueryOrder, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_project_member_entity_basic() -> Result<(), DbErr> {
    let entry_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();
    let member_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project_member::Model {
            id: entry_id,
            project: project_id,
            member: member_id,
            member_name: "Test User".to_owned(),
            position: 0,
        }]])
        .into_connection();

    let result = project_member::Entity::find_by_id(entry_id).one(&db).await?;

    assert!(result.is_some());
    let entry = result.unwrap();
    assert_eq!(entry.project, project_id);
    assert_eq!(entry.member, member_id);
    assert_eq!(entry.member_name, "Test User");

    Ok(())
}

#[tokio::test]
async fn test_project_member_ordering_by_position() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();

    let entries = vec![
        project_member::Model {
            id: Uuid::new_v4(),
            project: project_id,
            member: Uuid::new_v4(),
            member_name: "First".to_owned(),
            position: 0,
        },
        project_member::Model {
            id: Uuid::new_v4(),
            project: project_id,
            member: Uuid::new_v4(),
            member_name: "Second".to_owned(),
            position: 1,
        },
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([entries])
        .into_connection();

    let result = project_member::Entity::find()
        .filter(project_member::Column::Project.eq(project_id))
        .order_by_asc(project_member::Column::Position)
        .all(&db)
        .await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].member_name, "First");
    assert_eq!(result[1].position, 1);

    Ok(())
}

#[tokio::test]
async fn test_project_member_allows_duplicate_membership() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();
    let member_id = Uuid::new_v4();

    // The same user twice on one team is a valid state; the entries are
    // distinct rows with distinct positions.
    let entries = vec![
        project_member::Model {
            id: Uuid::new_v4(),
            project: project_id,
            member: member_id,
            member_name: "Test User".to_owned(),
            position: 0,
        },
        project_member::Model {
            id: Uuid::new_v4(),
            project: project_id,
            member: member_id,
            member_name: "Test User".to_owned(),
            position: 1,
        },
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([entries])
        .into_connection();

    let result = project_member::Entity::find()
        .filter(project_member::Column::Member.eq(member_id))
        .all(&db)
        .await?;

    assert_eq!(result.len(), 2);
    assert_ne!(result[0].id, result[1].id);

    Ok(())
}
