/// Base URL of the authentication service (identity, users, photos)
pub const DEFAULT_AUTH_URL: &str = "https://auth.etna-alternance.net";
/// Base URL of the intranet API (promotions, walls)
pub const DEFAULT_INTRA_URL: &str = "https://intra-api.etna-alternance.net";
/// Base URL of the achievements service (trophies and their pictures)
pub const DEFAULT_ACHIEVEMENTS_URL: &str = "https://achievements.etna-alternance.net";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "etna-client/0.1.0";
/// Format of the timestamps sent by the intranet (`2019-03-04 10:22:51`)
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the calendar dates sent by the intranet (`2019-03-04`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
