//! Environment configuration tests
//!
//! Kept in their own test binary since they mutate process environment.

use eventdripper_client::{ClientConfig, ClientError, DEFAULT_HOST};
use std::time::Duration;

#[test]
fn test_from_env() {
    unsafe {
        std::env::remove_var("EVENTDRIPPER_API_KEY");
        std::env::remove_var("EVENTDRIPPER_HOST");
        std::env::remove_var("EVENTDRIPPER_TIMEOUT_SECS");
    }
    assert!(matches!(
        ClientConfig::from_env(),
        Err(ClientError::ConfigError(_))
    ));

    unsafe { std::env::set_var("EVENTDRIPPER_API_KEY", "env-key") };
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.host, DEFAULT_HOST);

    unsafe {
        std::env::set_var("EVENTDRIPPER_HOST", "http://localhost:9000");
        std::env::set_var("EVENTDRIPPER_TIMEOUT_SECS", "7");
    }
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.host, "http://localhost:9000");
    assert_eq!(config.timeout, Duration::from_secs(7));

    unsafe { std::env::set_var("EVENTDRIPPER_TIMEOUT_SECS", "soon") };
    assert!(matches!(
        ClientConfig::from_env(),
        Err(ClientError::ConfigError(_))
    ));

    unsafe {
        std::env::remove_var("EVENTDRIPPER_API_KEY");
        std::env::remove_var("EVENTDRIPPER_HOST");
        std::env::remove_var("EVENTDRIPPER_TIMEOUT_SECS");
    }
}
