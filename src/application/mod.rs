/// Session management
pub mod auth;
/// Client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations for the client
pub mod services;
