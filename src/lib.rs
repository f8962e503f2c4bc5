/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ETNA Client
//!
//! An async client for the ETNA intranet API. It logs in with a login/password pair,
//! keeps the cookie-backed session alive and maps the intranet resources (user profile,
//! promotions, walls, trophies and pictures) into plain Rust types.
//!
//! ## Usage
//!
//! ```ignore
//! use etna_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.login("martin_y", "secret").await?;
//!
//! let me = client.user_info(None).await?;
//! println!("{}", me.identity());
//!
//! client.logout().await?;
//! ```
//!
//! Every resource call checks that the session is authenticated before touching the
//! network and, unless disabled in [`Config`](application::config::Config), probes the
//! identity endpoint first so an expired session is renewed with the stored credentials.

/// Application layer: configuration, session management, client and services
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Request and response models used on the wire
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Domain records returned to callers
pub mod presentation;
/// Utility functions (environment helpers, logging)
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
