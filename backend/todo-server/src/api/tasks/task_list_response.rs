use crate::api::tasks::task_dto::TaskDto;

use serde::Serialize;

/// Task list response with total count
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
    pub count: usize,
}
