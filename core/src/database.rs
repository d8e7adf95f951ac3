/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect,
};
use sea_orm_migration::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url.trim().to_string());

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_user_by_email(
    state: Arc<ServerState>,
    email: &str,
) -> Result<Option<MUser>> {
    EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await
        .context("Failed to query user by email")
}

pub async fn get_project_by_id(
    state: Arc<ServerState>,
    project_id: Uuid,
) -> Result<Option<MProject>> {
    EProject::find_by_id(project_id)
        .one(&state.db)
        .await
        .context("Failed to query project")
}

pub async fn get_managed_projects(
    state: Arc<ServerState>,
    user_id: Uuid,
) -> Result<Vec<MProject>> {
    EProject::find()
        .filter(CProject::Manager.eq(user_id))
        .all(&state.db)
        .await
        .context("Failed to query managed projects")
}

/// Projects where the user appears in the team list. A user added to the same
/// team twice would be joined twice, so the result is deduplicated by id.
pub async fn get_member_projects(
    state: Arc<ServerState>,
    user_id: Uuid,
) -> Result<Vec<MProject>> {
    let projects = EProject::find()
        .join_rev(
            JoinType::InnerJoin,
            EProjectMember::belongs_to(entity::project::Entity)
                .from(CProjectMember::Project)
                .to(CProject::Id)
                .into(),
        )
        .filter(CProjectMember::Member.eq(user_id))
        .all(&state.db)
        .await
        .context("Failed to query member projects")?;

    Ok(dedup_by_id(projects))
}

/// Archived projects visible to the user, as manager or as team member.
pub async fn get_archived_projects(
    state: Arc<ServerState>,
    user_id: Uuid,
) -> Result<Vec<MProject>> {
    let managed = EProject::find()
        .filter(
            Condition::all()
                .add(CProject::Manager.eq(user_id))
                .add(CProject::Archived.eq(true)),
        )
        .all(&state.db)
        .await
        .context("Failed to query archived managed projects")?;

    let member = EProject::find()
        .join_rev(
            JoinType::InnerJoin,
            EProjectMember::belongs_to(entity::project::Entity)
                .from(CProjectMember::Project)
                .to(CProject::Id)
                .into(),
        )
        .filter(
            Condition::all()
                .add(CProjectMember::Member.eq(user_id))
                .add(CProject::Archived.eq(true)),
        )
        .all(&state.db)
        .await
        .context("Failed to query archived member projects")?;

    Ok(dedup_by_id(managed.into_iter().chain(member).collect()))
}

pub async fn get_team(
    state: Arc<ServerState>,
    project_id: Uuid,
) -> Result<Vec<MProjectMember>> {
    EProjectMember::find()
        .filter(CProjectMember::Project.eq(project_id))
        .order_by_asc(CProjectMember::Position)
        .all(&state.db)
        .await
        .context("Failed to query project team")
}

/// Team entries with display names resolved through the user directory. The
/// denormalized `member_name` is only used when the referenced user record
/// cannot be found.
pub async fn get_team_roster(
    state: Arc<ServerState>,
    project_id: Uuid,
) -> Result<Vec<(Uuid, String)>> {
    let team = get_team(Arc::clone(&state), project_id).await?;

    if team.is_empty() {
        return Ok(Vec::new());
    }

    let member_ids: Vec<Uuid> = team.iter().map(|entry| entry.member).collect();
    let users = EUser::find()
        .filter(CUser::Id.is_in(member_ids))
        .all(&state.db)
        .await
        .context("Failed to resolve team member names")?;

    let names: HashMap<Uuid, String> = users.into_iter().map(|u| (u.id, u.name)).collect();

    Ok(team
        .into_iter()
        .map(|entry| {
            let name = names
                .get(&entry.member)
                .cloned()
                .unwrap_or(entry.member_name);
            (entry.member, name)
        })
        .collect())
}

/// Position for the next team entry to append.
pub async fn next_team_position(state: Arc<ServerState>, project_id: Uuid) -> Result<i32> {
    let last = EProjectMember::find()
        .filter(CProjectMember::Project.eq(project_id))
        .order_by_desc(CProjectMember::Position)
        .one(&state.db)
        .await
        .context("Failed to query team positions")?;

    Ok(last.map(|entry| entry.position + 1).unwrap_or(0))
}

fn dedup_by_id(projects: Vec<MProject>) -> Vec<MProject> {
    let mut seen = Vec::new();
    let mut result = Vec::new();

    for project in projects {
        if !seen.contains(&project.id) {
            seen.push(project.id);
            result.push(project);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_project(id: Uuid) -> MProject {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        MProject {
            id,
            manager: Uuid::new_v4(),
            name: "renovation".to_string(),
            description: String::new(),
            price: 1500.0,
            completed_jobs: String::new(),
            start_date: date,
            end_date: date,
            archived: false,
            created_at: date,
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let a = sample_project(Uuid::new_v4());
        let b = sample_project(Uuid::new_v4());
        let deduped = dedup_by_id(vec![a.clone(), b.clone(), a.clone()]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, a.id);
        assert_eq!(deduped[1].id, b.id);
    }
}
