/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use axum::{Extension, Json};
use teamboard_core::database::{get_project_by_id, next_team_position};
use teamboard_core::input::team_member_ids;
use teamboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct CandidateView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Candidate list for the add-team-member form: every registered user.
pub async fn get_add_team_member(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
) -> WebResult<Json<Vec<CandidateView>>> {
    get_project_by_id(state.0.clone(), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let users = EUser::find().all(&state.db).await?;

    let candidates = users
        .into_iter()
        .map(|u| CandidateView {
            id: u.id,
            name: u.name,
            email: u.email,
        })
        .collect();

    Ok(Json(candidates))
}

/// Appends team entries for the submitted candidate ids, in submission
/// order. The whole batch is validated before anything is written: one
/// unresolvable candidate aborts the request and leaves the team untouched.
/// Duplicate entries are allowed, the same as submitting a user twice.
pub async fn post_add_team_member(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
    Form(fields): Form<Vec<(String, String)>>,
) -> WebResult<Redirect> {
    let project = get_project_by_id(state.0.clone(), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let candidate_ids = team_member_ids(&fields);

    let mut resolved = Vec::with_capacity(candidate_ids.len());
    for raw_id in &candidate_ids {
        let member_id =
            Uuid::parse_str(raw_id).map_err(|_| WebError::not_found("User"))?;

        let member = EUser::find_by_id(member_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| WebError::not_found("User"))?;

        resolved.push(member);
    }

    let mut position = next_team_position(state.0.clone(), project.id).await?;

    let txn = state.db.begin().await?;
    for member in &resolved {
        let entry = AProjectMember {
            id: Set(Uuid::new_v4()),
            project: Set(project.id),
            member: Set(member.id),
            member_name: Set(member.name.clone()),
            position: Set(position),
        };

        entry.insert(&txn).await?;
        position += 1;
    }
    txn.commit().await?;

    tracing::info!(
        "Added {} team member(s) to project {} by {}",
        resolved.len(),
        project.id,
        user.id
    );

    Ok(Redirect::to("/my-projects"))
}
