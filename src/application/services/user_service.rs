use crate::application::client::Client;
use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::presentation::user::User;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl UserService for Client {
    async fn user_info(&self, user_login: Option<&str>) -> Result<User, AppError> {
        let login = self.http_client.authorize(user_login).await?;
        info!("Getting user information for {}", login);

        let url = self.http_client.config().rest_api.user_url(&login);
        let user: User = self.http_client.get(&url).await?;

        debug!("User obtained: {} ({} roles)", user.identity(), user.roles.len());
        Ok(user)
    }

    async fn user_avatar(&self, user_login: Option<&str>) -> Result<Vec<u8>, AppError> {
        let login = self.http_client.authorize(user_login).await?;
        debug!("Getting avatar for {}", login);

        let url = self.http_client.config().rest_api.user_photo_url(&login);
        let content = self.http_client.get_bytes(&url).await?;

        debug!("Avatar obtained: {} bytes", content.len());
        Ok(content)
    }
}
