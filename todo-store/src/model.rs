//! Todo 实体与请求类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    coerce,
    error::{StoreError, StoreResult},
};

/// 单条待办事项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建请求的原始载荷，校验前 `name` 可能缺失
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "coerce::option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::option_bool")]
    pub completed: Option<bool>,
}

impl CreateTodoRequest {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            completed: None,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// 已通过校验的创建载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

impl TryFrom<CreateTodoRequest> for NewTodo {
    type Error = StoreError;

    fn try_from(request: CreateTodoRequest) -> StoreResult<Self> {
        let name = request
            .name
            .ok_or_else(|| StoreError::validation("字段 name 不能为空"))?;

        Ok(Self {
            name,
            completed: request.completed.unwrap_or(false),
        })
    }
}

/// 部分更新载荷，缺省字段保持不变
///
/// `id`、`createdAt`、`updatedAt` 由服务端维护，请求体中出现时直接忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, deserialize_with = "coerce::option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::option_bool")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// 是否没有任何需要修改的字段
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults_completed_to_false() {
        let request: CreateTodoRequest = serde_json::from_value(json!({ "name": "买牛奶" })).unwrap();
        let todo = NewTodo::try_from(request).unwrap();

        assert_eq!(todo.name, "买牛奶");
        assert!(!todo.completed);
    }

    #[test]
    fn test_create_request_requires_name() {
        let missing: CreateTodoRequest = serde_json::from_value(json!({ "completed": true })).unwrap();
        let err = NewTodo::try_from(missing).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let null: CreateTodoRequest = serde_json::from_value(json!({ "name": null })).unwrap();
        assert!(NewTodo::try_from(null).is_err());
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let request: CreateTodoRequest =
            serde_json::from_value(json!({ "name": "x", "completed": true, "id": 42 })).unwrap();
        let todo = NewTodo::try_from(request).unwrap();

        assert_eq!(todo, NewTodo { name: "x".to_string(), completed: true });
    }

    #[test]
    fn test_create_request_coerces_types() {
        let request: CreateTodoRequest =
            serde_json::from_value(json!({ "name": 123, "completed": "true" })).unwrap();
        let todo = NewTodo::try_from(request).unwrap();
        assert_eq!(todo, NewTodo { name: "123".to_string(), completed: true });

        let patch: TodoPatch = serde_json::from_value(json!({ "completed": 0 })).unwrap();
        assert_eq!(patch, TodoPatch::new().completed(false));

        assert!(serde_json::from_value::<TodoPatch>(json!({ "completed": "maybe" })).is_err());
    }

    #[test]
    fn test_patch_ignores_server_managed_fields() {
        let patch: TodoPatch = serde_json::from_value(json!({
            "id": 7,
            "completed": true,
            "createdAt": "2020-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(patch, TodoPatch::new().completed(true));
        assert!(!patch.is_empty());
        assert!(TodoPatch::default().is_empty());
    }

    #[test]
    fn test_todo_serializes_camel_case() {
        let now = Utc::now();
        let todo = Todo {
            id: 1,
            name: "写周报".to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["completed"], false);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
