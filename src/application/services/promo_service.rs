use crate::application::client::Client;
use crate::application::interfaces::promo::PromoService;
use crate::error::AppError;
use crate::presentation::promo::Promotion;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PromoService for Client {
    async fn user_promo(&self, user_login: Option<&str>) -> Result<Vec<Promotion>, AppError> {
        let login = self.http_client.authorize(user_login).await?;
        info!("Getting promotions for {}", login);

        let url = self.http_client.config().rest_api.promo_url(&login);
        let promotions: Vec<Promotion> = self.http_client.get(&url).await?;

        debug!("Promotions obtained: {} promotions", promotions.len());
        Ok(promotions)
    }
}
