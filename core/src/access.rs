/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Role predicates for project-scoped routes. A caller is either the manager
//! of a project (set at creation, never reassigned) or a team member
//! (referenced from the team list). Checks that fail because the caller lacks
//! the role return `None`, indistinguishable from a missing project, so
//! callers cannot probe for project ids they have no access to.

use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use super::types::*;

pub fn is_manager(user_id: Uuid, project: &MProject) -> bool {
    project.manager == user_id
}

pub async fn is_member(state: Arc<ServerState>, user_id: Uuid, project_id: Uuid) -> Result<bool> {
    let entry = EProjectMember::find()
        .filter(
            Condition::all()
                .add(CProjectMember::Project.eq(project_id))
                .add(CProjectMember::Member.eq(user_id)),
        )
        .one(&state.db)
        .await
        .context("Failed to query project membership")?;

    Ok(entry.is_some())
}

/// The project, if it exists and the user manages it.
pub async fn get_project_for_manager(
    state: Arc<ServerState>,
    user_id: Uuid,
    project_id: Uuid,
) -> Result<Option<MProject>> {
    EProject::find_by_id(project_id)
        .filter(CProject::Manager.eq(user_id))
        .one(&state.db)
        .await
        .context("Failed to query project as manager")
}

/// The project, if it exists and the user appears in its team list.
pub async fn get_project_for_member(
    state: Arc<ServerState>,
    user_id: Uuid,
    project_id: Uuid,
) -> Result<Option<MProject>> {
    EProject::find_by_id(project_id)
        .join_rev(
            JoinType::InnerJoin,
            EProjectMember::belongs_to(entity::project::Entity)
                .from(CProjectMember::Project)
                .to(CProject::Id)
                .into(),
        )
        .filter(CProjectMember::Member.eq(user_id))
        .one(&state.db)
        .await
        .context("Failed to query project as member")
}
