use etna_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("ETNA_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("ETNA_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("ETNA_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("ETNA_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("ETNA_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("ETNA_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("ETNA_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("ETNA_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("ETNA_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("ETNA_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::set_var("ETNA_TEST_VAR_OPTION", "abc");
        let result: Option<u32> = get_env_or_none("ETNA_TEST_VAR_OPTION");
        assert_eq!(result, None);
        env::remove_var("ETNA_TEST_VAR_OPTION");
    }
    let result: Option<u32> = get_env_or_none("ETNA_TEST_VAR_OPTION");
    assert_eq!(result, None);
}

#[test]
fn test_get_env_flag_variants() {
    unsafe {
        for (raw, expected) in [("1", true), ("YES", true), ("on", true), ("0", false), ("No", false), ("false", false)] {
            env::set_var("ETNA_TEST_FLAG", raw);
            assert_eq!(get_env_flag("ETNA_TEST_FLAG", !expected), expected, "value {raw}");
        }
        env::set_var("ETNA_TEST_FLAG", "maybe");
        assert!(get_env_flag("ETNA_TEST_FLAG", true));
        assert!(!get_env_flag("ETNA_TEST_FLAG", false));
        env::remove_var("ETNA_TEST_FLAG");
    }
    assert!(get_env_flag("ETNA_TEST_FLAG", true));
}
