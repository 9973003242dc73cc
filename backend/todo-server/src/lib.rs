pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    delete_response::DeleteResponse,
    error::{ApiError, Result as ApiResult},
    extractors::current_user::CurrentUser,
    identity_store::SqlIdentityStore,
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
