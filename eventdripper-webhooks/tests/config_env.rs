//! Environment configuration tests
//!
//! Kept in their own test binary since they mutate process environment.

use eventdripper_webhooks::{TOLERANCE_ENV, VerifierConfig, WebhookError};

#[test]
fn test_from_env() {
    unsafe { std::env::remove_var(TOLERANCE_ENV) };
    assert_eq!(VerifierConfig::from_env().unwrap().tolerance_secs, 300);

    unsafe { std::env::set_var(TOLERANCE_ENV, "0") };
    assert!(!VerifierConfig::from_env().unwrap().tolerance_enabled());

    unsafe { std::env::set_var(TOLERANCE_ENV, " 60 ") };
    assert_eq!(VerifierConfig::from_env().unwrap().tolerance_secs, 60);

    unsafe { std::env::set_var(TOLERANCE_ENV, "five minutes") };
    assert!(matches!(
        VerifierConfig::from_env(),
        Err(WebhookError::ConfigError(_))
    ));

    unsafe { std::env::remove_var(TOLERANCE_ENV) };
}
