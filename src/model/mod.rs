/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Login request and identity payload
pub mod auth;
/// HTTP layer shared by every resource fetcher
pub mod http;
