//! Utility modules for the gateway
//!
//! - **error**: error taxonomy and HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup

pub use logging::{LogFormat, init_logging};

use std::sync::OnceLock;

/// Check if a string is a valid URL
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

/// Check if a string is a valid email
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Option<regex::Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| regex::Regex::new(r#"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"#).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Join a base URL and a path without doubling or dropping the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
