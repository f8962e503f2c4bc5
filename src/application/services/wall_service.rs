use crate::application::client::Client;
use crate::application::interfaces::wall::WallService;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl WallService for Client {
    async fn walls_list(&self) -> Result<Vec<String>, AppError> {
        self.http_client.authorize(None).await?;
        info!("Getting walls");

        let url = self.http_client.config().rest_api.walls_url();
        let walls: Vec<String> = self.http_client.get(&url).await?;

        debug!("Walls obtained: {} walls", walls.len());
        Ok(walls)
    }

    async fn wall_messages(
        &self,
        wall_name: &str,
        start: u32,
        stop: u32,
    ) -> Result<Value, AppError> {
        self.http_client.authorize(None).await?;
        info!("Getting messages {}..{} of wall {}", start, stop, wall_name);

        let url = self
            .http_client
            .config()
            .rest_api
            .wall_conversations_url(wall_name, start, stop);
        self.http_client.get(&url).await
    }
}
