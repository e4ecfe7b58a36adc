//! Configuration utility functions
//!
//! This module provides helper functions for reading configuration values
//! from environment variables.

/// Get a string value from an environment variable or use the default.
///
/// Empty values count as unset.
pub fn get_env_string(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
        _ => default,
    }
}

/// Get a comma-separated list from an environment variable or use the default.
pub fn get_env_list(key: &str, default: Vec<String>) -> Vec<String> {
    match std::env::var(key) {
        Ok(val) => {
            let list = parse_list(&val);
            if list.is_empty() { default } else { list }
        }
        Err(_) => default,
    }
}

/// Splits a comma-separated value, trimming whitespace and dropping empty items.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
