//! Task REST API handlers.
//!
//! Every handler runs the same gate before touching the repository: the
//! bearer token is resolved to a user ([`CurrentUser`]), then the path
//! `user_id` is checked against that identity. A mismatched path id is
//! Forbidden whether or not it names a real account.

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::tasks::create_task_request::CreateTaskRequest;
use crate::api::tasks::task_dto::TaskDto;
use crate::api::tasks::task_list_response::TaskListResponse;
use crate::api::tasks::task_response::TaskResponse;
use crate::api::tasks::update_task_request::UpdateTaskRequest;
use crate::state::AppState;

use todo_core::Task;
use todo_core::validation::{normalize_description, normalize_title};
use todo_db::TaskRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/{user_id}/tasks
///
/// List the owner's tasks, newest first
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<TaskListResponse>> {
    state.authorizer.authorize(&user, &user_id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let tasks = repo.find_by_user(user.id).await?;

    let count = tasks.len();
    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
        count,
    }))
}

/// POST /api/{user_id}/tasks
///
/// Create a task for the owner
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(user_id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    state.authorizer.authorize(&user, &user_id)?;

    let title = normalize_title(&req.title)?;
    let description = normalize_description(req.description.as_deref())?;

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo.create(Task::new(user.id, title, description)).await?;

    log::info!("Created task {} for user {}", task.id, user.id);

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse { task: task.into() }),
    ))
}

/// GET /api/{user_id}/tasks/{task_id}
///
/// Fetch a single task
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((user_id, task_id)): Path<(String, i64)>,
) -> ApiResult<Json<TaskResponse>> {
    state.authorizer.authorize(&user, &user_id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let task = repo
        .find_by_id_for_user(task_id, user.id)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// PUT /api/{user_id}/tasks/{task_id}
///
/// Update title, description, and completion state
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((user_id, task_id)): Path<(String, i64)>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    state.authorizer.authorize(&user, &user_id)?;

    let title = normalize_title(&req.title)?;
    let description = normalize_description(req.description.as_deref())?;

    let repo = TaskRepository::new(state.pool.clone());
    let mut task = repo
        .find_by_id_for_user(task_id, user.id)
        .await?
        .ok_or_else(|| task_not_found(task_id))?;

    task.title = title;
    task.description = description;
    if let Some(is_complete) = req.is_complete {
        task.is_complete = is_complete;
    }
    task.updated_at = Utc::now();

    if !repo.update(&task).await? {
        // Deleted between fetch and update
        return Err(task_not_found(task_id));
    }

    log::info!("Updated task {} for user {}", task.id, user.id);

    Ok(Json(TaskResponse { task: task.into() }))
}

/// DELETE /api/{user_id}/tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((user_id, task_id)): Path<(String, i64)>,
) -> ApiResult<Json<DeleteResponse>> {
    state.authorizer.authorize(&user, &user_id)?;

    let repo = TaskRepository::new(state.pool.clone());
    if !repo.delete_for_user(task_id, user.id).await? {
        return Err(task_not_found(task_id));
    }

    log::info!("Deleted task {} for user {}", task_id, user.id);

    Ok(Json(DeleteResponse {
        id: task_id,
        deleted: true,
    }))
}

#[track_caller]
fn task_not_found(task_id: i64) -> ApiError {
    ApiError::NotFound {
        message: format!("Task {} not found", task_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
