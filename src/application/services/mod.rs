/// Promotion service implementation
pub mod promo_service;
/// Trophy service implementation
pub mod trophy_service;
/// User service implementation
pub mod user_service;
/// Wall service implementation
pub mod wall_service;

pub use crate::application::interfaces::promo::*;
pub use crate::application::interfaces::trophy::*;
pub use crate::application::interfaces::user::*;
pub use crate::application::interfaces::wall::*;
