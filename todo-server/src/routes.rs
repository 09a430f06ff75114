use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};
use todo_store::{CreateTodoRequest, NewTodo, Todo, TodoPatch};
use tracing::debug;

use crate::{error::ApiResult, AppState};

pub const UPDATE_MESSAGE: &str = "Successful update";
pub const DESTROY_MESSAGE: &str = "Successful destroy";

/// 更新、删除接口的确认消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.store().list().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let Json(request) = payload?;
    let new_todo = NewTodo::try_from(request)?;

    let todo = state.store().create(new_todo).await?;
    Ok(Json(todo))
}

pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Option<Todo>>> {
    let Path(id) = id?;
    let todo = state.store().get(id).await?;
    Ok(Json(todo))
}

/// 行不存在时同样返回成功确认
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(patch) = payload?;

    let affected = state.store().update(id, patch).await?;
    if affected == 0 {
        debug!("更新的 Todo 不存在: id={}", id);
    }

    Ok(Json(MessageResponse::new(UPDATE_MESSAGE)))
}

/// 行不存在时同样返回成功确认
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;

    let affected = state.store().delete(id).await?;
    if affected == 0 {
        debug!("删除的 Todo 不存在: id={}", id);
    }

    Ok(Json(MessageResponse::new(DESTROY_MESSAGE)))
}
