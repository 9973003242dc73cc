use crate::api::tasks::task_dto::TaskDto;

use serde::Serialize;

/// Single task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskDto,
}
