/// Promotion models
pub mod promo;
/// Date parsing and serde helpers for intranet payloads
pub mod serialization;
/// Trophy models
pub mod trophy;
/// User profile models
pub mod user;
