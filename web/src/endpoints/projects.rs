/*
 * SPDX-FileCopyrightText: 2025 Teamboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Extension, Json};
use chrono::{NaiveDate, NaiveTime, Utc};
use teamboard_core::access::{get_project_for_manager, get_project_for_member};
use teamboard_core::database::{
    get_archived_projects, get_managed_projects, get_member_projects, get_team_roster,
};
use teamboard_core::input::validate_display_name;
use teamboard_core::types::*;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamMemberView {
    pub user: Uuid,
    pub name: String,
}

/// What a listing or edit template would be fed: the project fields with
/// dates reduced to calendar dates and the team resolved to display names.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectView {
    pub id: Uuid,
    pub manager: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub completed_jobs: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub archived: bool,
    pub team: Vec<TeamMemberView>,
}

impl ProjectView {
    fn from_parts(project: MProject, team: Vec<TeamMemberView>) -> Self {
        ProjectView {
            id: project.id,
            manager: project.manager,
            name: project.name,
            description: project.description,
            price: project.price,
            completed_jobs: project.completed_jobs,
            start_date: project.start_date.date(),
            end_date: project.end_date.date(),
            archived: project.archived,
            team,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub completed_jobs: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompletedJobsForm {
    pub completed_jobs: String,
}

async fn into_views(
    state: Arc<ServerState>,
    projects: Vec<MProject>,
) -> WebResult<Vec<ProjectView>> {
    let mut views = Vec::with_capacity(projects.len());

    for project in projects {
        let roster = get_team_roster(Arc::clone(&state), project.id).await?;
        let team = roster
            .into_iter()
            .map(|(user, name)| TeamMemberView { user, name })
            .collect();
        views.push(ProjectView::from_parts(project, team));
    }

    Ok(views)
}

pub async fn get_index() -> StatusCode {
    StatusCode::OK
}

pub async fn get_my_projects(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<Vec<ProjectView>>> {
    let projects = get_managed_projects(state.0.clone(), user.id).await?;
    Ok(Json(into_views(state.0.clone(), projects).await?))
}

pub async fn get_part_of_projects(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<Vec<ProjectView>>> {
    let projects = get_member_projects(state.0.clone(), user.id).await?;
    Ok(Json(into_views(state.0.clone(), projects).await?))
}

pub async fn get_archive(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<Vec<ProjectView>>> {
    let projects = get_archived_projects(state.0.clone(), user.id).await?;
    Ok(Json(into_views(state.0.clone(), projects).await?))
}

pub async fn get_add_project() -> StatusCode {
    StatusCode::OK
}

pub async fn post_add_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Form(body): Form<ProjectForm>,
) -> WebResult<Redirect> {
    if let Err(e) = validate_display_name(&body.name) {
        return Err(WebError::BadRequest(format!("Invalid project name: {}", e)));
    }

    let project = AProject {
        id: Set(Uuid::new_v4()),
        manager: Set(user.id),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        price: Set(body.price),
        completed_jobs: Set(body.completed_jobs.clone()),
        start_date: Set(body.start_date.and_time(NaiveTime::MIN)),
        end_date: Set(body.end_date.and_time(NaiveTime::MIN)),
        archived: Set(body.archived),
        created_at: Set(Utc::now().naive_utc()),
    };

    let project = project.insert(&state.db).await?;
    tracing::info!("Project created: {} by {}", project.id, user.id);

    Ok(Redirect::to("/my-projects"))
}

pub async fn get_edit_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
) -> WebResult<Json<ProjectView>> {
    let project = get_project_for_manager(state.0.clone(), user.id, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let roster = get_team_roster(state.0.clone(), project.id).await?;
    let team = roster
        .into_iter()
        .map(|(user, name)| TeamMemberView { user, name })
        .collect();

    Ok(Json(ProjectView::from_parts(project, team)))
}

pub async fn post_edit_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
    Form(body): Form<ProjectForm>,
) -> WebResult<Redirect> {
    let project = get_project_for_manager(state.0.clone(), user.id, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    if let Err(e) = validate_display_name(&body.name) {
        return Err(WebError::BadRequest(format!("Invalid project name: {}", e)));
    }

    let mut aproject: AProject = project.into();
    aproject.name = Set(body.name.clone());
    aproject.description = Set(body.description.clone());
    aproject.price = Set(body.price);
    aproject.completed_jobs = Set(body.completed_jobs.clone());
    aproject.start_date = Set(body.start_date.and_time(NaiveTime::MIN));
    aproject.end_date = Set(body.end_date.and_time(NaiveTime::MIN));
    aproject.archived = Set(body.archived);

    aproject.update(&state.db).await?;

    Ok(Redirect::to("/my-projects"))
}

pub async fn get_edit_project_user(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
) -> WebResult<Json<ProjectView>> {
    let project = get_project_for_member(state.0.clone(), user.id, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let roster = get_team_roster(state.0.clone(), project.id).await?;
    let team = roster
        .into_iter()
        .map(|(user, name)| TeamMemberView { user, name })
        .collect();

    Ok(Json(ProjectView::from_parts(project, team)))
}

/// Team members may only touch the completed-jobs notes; every other field
/// is read-only on the member-facing path.
pub async fn post_edit_project_user(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
    Form(body): Form<CompletedJobsForm>,
) -> WebResult<Redirect> {
    let project = get_project_for_member(state.0.clone(), user.id, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let mut aproject: AProject = project.into();
    aproject.completed_jobs = Set(body.completed_jobs.clone());
    aproject.update(&state.db).await?;

    Ok(Redirect::to("/part-of-projects"))
}

pub async fn post_delete_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project_id): Path<Uuid>,
) -> WebResult<Redirect> {
    let project = get_project_for_manager(state.0.clone(), user.id, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let aproject: AProject = project.into();
    aproject.delete(&state.db).await?;
    tracing::info!("Project deleted: {} by {}", project_id, user.id);

    Ok(Redirect::to("/my-projects"))
}
