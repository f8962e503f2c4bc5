use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for wall operations
#[async_trait]
pub trait WallService: Send + Sync {
    /// Gets the names of the walls the logged user can read
    async fn walls_list(&self) -> Result<Vec<String>, AppError>;

    /// Gets the conversations of a wall
    ///
    /// # Arguments
    /// * `wall_name` - Name of the wall
    /// * `start` - Index of the first message, starting at 0
    /// * `stop` - Number of messages to return
    ///
    /// # Returns
    /// * The JSON document sent by the intranet, unchanged
    async fn wall_messages(&self, wall_name: &str, start: u32, stop: u32)
    -> Result<Value, AppError>;
}
