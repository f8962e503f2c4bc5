/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ETNA Client Prelude
//!
//! Brings the client, its configuration, the service traits and the returned records
//! into scope with a single import.
//!
//! ```ignore
//! use etna_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.login_from_config().await?;
//! let me: User = client.user_info(None).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ETNA client
pub use crate::application::config::{Config, Credentials, LoginEncoding, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error type and result alias
pub use crate::error::{AppError, EtnaResult};

// ============================================================================
// CLIENT AND SESSION MANAGEMENT
// ============================================================================

/// Session manager and open session
pub use crate::application::auth::{Auth, Session};

/// Client facade
pub use crate::application::client::Client;

/// Login payloads
pub use crate::model::auth::{Identity, LoginRequest};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::promo::PromoService;
pub use crate::application::interfaces::trophy::TrophyService;
pub use crate::application::interfaces::user::UserService;
pub use crate::application::interfaces::wall::WallService;

// ============================================================================
// RECORDS
// ============================================================================

pub use crate::presentation::promo::Promotion;
pub use crate::presentation::trophy::{Trophy, TrophyImage};
pub use crate::presentation::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
