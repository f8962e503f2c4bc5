/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Reads `env_var` and parses it, falling back to `default` when the variable is
/// unset or does not parse. Parse failures are logged.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads `env_var` and parses it, `None` when unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean flag. Accepts `true/false`, `1/0`, `yes/no` and `on/off`
/// in any case; anything else yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Ok(val) = env::var(env_var) else {
        return default;
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => {
            debug!("Unrecognised flag {}={}, using default", env_var, other);
            default
        }
    }
}
