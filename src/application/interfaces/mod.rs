/// Promotion service interface
pub mod promo;
/// Trophy service interface
pub mod trophy;
/// User service interface
pub mod user;
/// Wall service interface
pub mod wall;
