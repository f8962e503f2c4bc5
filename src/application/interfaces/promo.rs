use crate::error::AppError;
use crate::presentation::promo::Promotion;
use async_trait::async_trait;

/// Interface for promotion operations
#[async_trait]
pub trait PromoService: Send + Sync {
    /// Gets the promotions of `user_login`, or of the logged user when `None`
    async fn user_promo(&self, user_login: Option<&str>) -> Result<Vec<Promotion>, AppError>;
}
