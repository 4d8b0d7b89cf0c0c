//! Property-based tests for error module.
//!
//! Error messages must carry enough context to act on: API errors name the
//! endpoint, status and remote message; workflow errors keep the remote detail.

use proptest::prelude::*;

use crate::error::{ConfigError, Error};

/// Generate HTTP status codes (100-599)
fn http_status_strategy() -> impl Strategy<Value = u16> {
    100u16..600u16
}

/// Generate Ark task endpoints
fn endpoint_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_map(|id| {
        format!("https://ark.cn-beijing.volces.com/api/v3/contents/generations/tasks/cgt-{}", id)
    })
}

/// Generate error messages
fn message_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,100}"
}

proptest! {
    /// API errors include endpoint, status code and message.
    #[test]
    fn api_error_contains_context(
        endpoint in endpoint_strategy(),
        status in http_status_strategy(),
        message in message_strategy(),
    ) {
        let err = Error::api(&endpoint, status, &message);
        let display = err.to_string();

        prop_assert!(display.contains(&endpoint), "Should contain endpoint");
        prop_assert!(display.contains(&status.to_string()), "Should contain status code");
        prop_assert!(display.contains(&message), "Should contain message");
        prop_assert_eq!(err.status_code(), Some(status));
    }

    /// Remote failure detail survives into the message unchanged.
    #[test]
    fn task_failed_keeps_detail(detail in message_strategy()) {
        let display = Error::task_failed(&detail).to_string();
        prop_assert_eq!(display, format!("Task failed with error: {}", detail));
    }

    /// Timeout messages report the attempt budget.
    #[test]
    fn timeout_reports_attempts(attempts in 1u32..1000) {
        let display = Error::timeout(attempts).to_string();
        prop_assert!(display.contains(&attempts.to_string()));
        prop_assert!(display.contains("timed out"));
    }

    /// Missing variable errors name the variable.
    #[test]
    fn missing_env_var_names_variable(name in "[A-Z][A-Z_]{2,30}") {
        let err: Error = ConfigError::missing_env_var(&name).into();
        prop_assert!(err.to_string().contains(&name));
    }
}

