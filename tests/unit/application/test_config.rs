use etna_client::application::config::{Config, LoginEncoding};
use etna_client::constants::{DEFAULT_AUTH_URL, DEFAULT_INTRA_URL, DEFAULT_REST_TIMEOUT};
use std::env;

#[test]
fn test_with_base_url_points_every_service_at_the_base() {
    let config = Config::with_base_url("http://127.0.0.1:1234/");
    assert_eq!(config.rest_api.auth_url, "http://127.0.0.1:1234");
    assert_eq!(config.rest_api.intra_url, "http://127.0.0.1:1234");
    assert_eq!(config.rest_api.achievements_url, "http://127.0.0.1:1234");
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
    assert!(config.keep_alive);
    assert_eq!(config.login_encoding, LoginEncoding::Json);
}

#[test]
fn test_endpoint_templates() {
    let mut config = Config::with_base_url("http://localhost");
    config.rest_api.auth_url = DEFAULT_AUTH_URL.to_string();
    config.rest_api.intra_url = format!("{DEFAULT_INTRA_URL}/");
    config.rest_api.achievements_url = "https://achievements.etna-alternance.net".to_string();
    let api = &config.rest_api;

    assert_eq!(api.identity_url(), "https://auth.etna-alternance.net/identity");
    assert_eq!(
        api.user_url("martin_y"),
        "https://auth.etna-alternance.net/api/users/martin_y"
    );
    assert_eq!(
        api.user_photo_url("martin_y"),
        "https://auth.etna-alternance.net/api/users/martin_y/photo"
    );
    assert_eq!(
        api.promo_url("martin_y"),
        "https://intra-api.etna-alternance.net/promo?login=martin_y"
    );
    assert_eq!(api.walls_url(), "https://intra-api.etna-alternance.net/walls");
    assert_eq!(
        api.wall_conversations_url("Bachelor", 0, 10),
        "https://intra-api.etna-alternance.net/walls/Bachelor/conversations?from=0&size=10"
    );
    assert_eq!(
        api.achievements_url_for("martin_y"),
        "https://achievements.etna-alternance.net/api/users/martin_y/achievements"
    );
    assert_eq!(
        api.trophy_image_url(42),
        "https://achievements.etna-alternance.net/api/achievements/42.png"
    );
}

#[test]
fn test_login_encoding_parsing() {
    assert_eq!("json".parse::<LoginEncoding>(), Ok(LoginEncoding::Json));
    assert_eq!(" FORM ".parse::<LoginEncoding>(), Ok(LoginEncoding::Form));
    assert_eq!("urlencoded".parse::<LoginEncoding>(), Ok(LoginEncoding::Form));
    assert!("xml".parse::<LoginEncoding>().is_err());
    assert_eq!(LoginEncoding::Form.to_string(), "form");
    assert_eq!(LoginEncoding::default(), LoginEncoding::Json);
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("ETNA_LOGIN", "martin_y");
        env::set_var("ETNA_PASSWORD", "secret");
        env::set_var("ETNA_INTRA_URL", "http://intra.local");
        env::set_var("ETNA_REST_TIMEOUT", "5");
        env::set_var("ETNA_KEEP_ALIVE", "off");
        env::set_var("ETNA_LOGIN_ENCODING", "form");
    }

    let config = Config::new();

    unsafe {
        for var in [
            "ETNA_LOGIN",
            "ETNA_PASSWORD",
            "ETNA_INTRA_URL",
            "ETNA_REST_TIMEOUT",
            "ETNA_KEEP_ALIVE",
            "ETNA_LOGIN_ENCODING",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.credentials.login, "martin_y");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.rest_api.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.rest_api.intra_url, "http://intra.local");
    assert_eq!(config.rest_api.timeout, 5);
    assert!(!config.keep_alive);
    assert_eq!(config.login_encoding, LoginEncoding::Form);
}

#[test]
fn test_config_display_hides_password() {
    let mut config = Config::with_base_url("http://localhost");
    config.credentials.login = "martin_y".to_string();
    config.credentials.password = "hunter2".to_string();

    let shown = config.to_string();
    assert!(shown.contains("martin_y"));
    assert!(!shown.contains("hunter2"));
}

#[test]
fn test_endpoint_templates_encode_logins_and_walls() {
    let config = Config::with_base_url("http://localhost");
    let api = &config.rest_api;

    assert_eq!(
        api.promo_url("a&login=victim"),
        "http://localhost/promo?login=a%26login%3Dvictim"
    );
    assert_eq!(
        api.user_url("../admin"),
        "http://localhost/api/users/..%2Fadmin"
    );
    assert_eq!(
        api.user_photo_url("a b"),
        "http://localhost/api/users/a%20b/photo"
    );
    assert_eq!(
        api.wall_conversations_url("Vie étudiante", 0, 5),
        "http://localhost/walls/Vie%20%C3%A9tudiante/conversations?from=0&size=5"
    );
    assert_eq!(
        api.achievements_url_for("x?y"),
        "http://localhost/api/users/x%3Fy/achievements"
    );
}
