pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
