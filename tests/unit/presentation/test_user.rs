use chrono::NaiveDate;
use etna_client::error::AppError;
use etna_client::model::http::parse_json;
use etna_client::presentation::user::User;
use serde_json::json;

fn user_json(close: serde_json::Value) -> serde_json::Value {
    json!({
        "id": 1337,
        "login": "martin_y",
        "firstname": "Yohann",
        "lastname": "Martin",
        "email": "martin_y@etna-alternance.net",
        "close": close,
        "roles": ["student", "adm"],
        "created_at": "2017-09-01 08:30:00",
        "updated_at": "2019-03-04 10:22:51",
        "deleted_at": null
    })
}

#[test]
fn test_user_open_account() {
    let user: User = serde_json::from_value(user_json(json!(false))).unwrap();

    assert_eq!(user.id, 1337);
    assert_eq!(user.login, "martin_y");
    assert_eq!(user.firstname, "Yohann");
    assert_eq!(user.lastname, "Martin");
    assert_eq!(user.email, "martin_y@etna-alternance.net");
    assert_eq!(user.roles, vec!["student".to_string(), "adm".to_string()]);
    assert!(!user.close);
    assert_eq!(user.closed_at, None);
    assert_eq!(user.is_closed(), (false, None));
    assert_eq!(
        user.created_at,
        NaiveDate::from_ymd_opt(2017, 9, 1).and_then(|d| d.and_hms_opt(8, 30, 0))
    );
    assert_eq!(
        user.updated_at,
        NaiveDate::from_ymd_opt(2019, 3, 4).and_then(|d| d.and_hms_opt(10, 22, 51))
    );
    assert_eq!(user.deleted_at, None);
    assert_eq!(user.identity(), "Yohann Martin");
}

#[test]
fn test_user_closed_account_with_date() {
    let user: User = serde_json::from_value(user_json(json!("2020-07-01 12:00:00"))).unwrap();

    let closed_at = NaiveDate::from_ymd_opt(2020, 7, 1).and_then(|d| d.and_hms_opt(12, 0, 0));
    assert!(user.close);
    assert_eq!(user.closed_at, closed_at);
    assert_eq!(user.is_closed(), (true, closed_at));
}

#[test]
fn test_user_closed_flag_without_date() {
    let user: User = serde_json::from_value(user_json(json!(true))).unwrap();
    assert_eq!(user.is_closed(), (true, None));
}

#[test]
fn test_user_null_close_is_open() {
    let user: User = serde_json::from_value(user_json(json!(null))).unwrap();
    assert!(!user.close);
}

#[test]
fn test_user_malformed_close_is_rejected() {
    let body = serde_json::to_vec(&user_json(json!("yesterday"))).unwrap();
    match parse_json::<User>(&body) {
        Err(AppError::MalformedPayload(msg)) => assert!(msg.contains("close")),
        other => panic!("Expected MalformedPayload, got {other:?}"),
    }

    let body = serde_json::to_vec(&user_json(json!(3))).unwrap();
    assert!(matches!(
        parse_json::<User>(&body),
        Err(AppError::MalformedPayload(_))
    ));
}

#[test]
fn test_user_missing_field_is_rejected() {
    let mut value = user_json(json!(false));
    value.as_object_mut().unwrap().remove("email");
    let body = serde_json::to_vec(&value).unwrap();

    assert!(matches!(
        parse_json::<User>(&body),
        Err(AppError::MalformedPayload(_))
    ));
}

#[test]
fn test_user_serializes_dates_in_intranet_format() {
    let user: User = serde_json::from_value(user_json(json!("2020-07-01 12:00:00"))).unwrap();
    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(value["closed_at"], json!("2020-07-01 12:00:00"));
    assert_eq!(value["created_at"], json!("2017-09-01 08:30:00"));
    assert_eq!(value["deleted_at"], json!(null));
    assert_eq!(value["close"], json!(true));
}

#[test]
fn test_user_reads_back_its_serialized_form() {
    for close in [json!(false), json!(true), json!("2020-07-01 12:00:00")] {
        let user: User = serde_json::from_value(user_json(close)).unwrap();
        let text = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&text).unwrap();
        assert_eq!(back, user);
    }
}

#[test]
fn test_user_closed_flag_with_separate_date() {
    let mut value = user_json(json!(true));
    value["closed_at"] = json!("2020-07-01 12:00:00");
    let user: User = serde_json::from_value(value).unwrap();

    let closed_at = NaiveDate::from_ymd_opt(2020, 7, 1).and_then(|d| d.and_hms_opt(12, 0, 0));
    assert_eq!(user.is_closed(), (true, closed_at));
}
