pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::task::Task;
pub use models::user::User;
