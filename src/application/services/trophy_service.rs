use crate::application::client::Client;
use crate::application::interfaces::trophy::TrophyService;
use crate::error::AppError;
use crate::presentation::trophy::{Trophy, TrophyImage};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl TrophyService for Client {
    async fn user_trophy(&self, user_login: Option<&str>) -> Result<Vec<Trophy>, AppError> {
        let login = self.http_client.authorize(user_login).await?;
        info!("Getting trophies for {}", login);

        let rest_api = &self.http_client.config().rest_api;
        let trophies: Vec<Trophy> = self
            .http_client
            .get(&rest_api.achievements_url_for(&login))
            .await?;

        debug!("Trophies obtained: {} trophies", trophies.len());
        Ok(trophies
            .into_iter()
            .map(|t| t.with_image_base(&rest_api.achievements_url))
            .collect())
    }

    async fn trophy_picture(&self, id_trophy: u64) -> Result<TrophyImage, AppError> {
        self.http_client.authorize(None).await?;
        debug!("Getting picture of trophy {}", id_trophy);

        let url = self.http_client.config().rest_api.trophy_image_url(id_trophy);
        let content = self.http_client.get_bytes(&url).await?;

        Ok(TrophyImage { url, content })
    }
}
