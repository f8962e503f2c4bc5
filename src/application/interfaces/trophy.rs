use crate::error::AppError;
use crate::presentation::trophy::{Trophy, TrophyImage};
use async_trait::async_trait;

/// Interface for trophy operations
#[async_trait]
pub trait TrophyService: Send + Sync {
    /// Gets the trophies of `user_login`, or of the logged user when `None`
    async fn user_trophy(&self, user_login: Option<&str>) -> Result<Vec<Trophy>, AppError>;

    /// Gets the picture of a trophy together with its URL
    async fn trophy_picture(&self, id_trophy: u64) -> Result<TrophyImage, AppError>;
}
