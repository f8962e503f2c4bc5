use crate::error::AppError;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for user profile operations
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the profile of `user_login`, or of the logged user when `None`
    async fn user_info(&self, user_login: Option<&str>) -> Result<User, AppError>;

    /// Gets the raw bytes of the avatar of `user_login`, or of the logged user when `None`
    async fn user_avatar(&self, user_login: Option<&str>) -> Result<Vec<u8>, AppError>;
}
