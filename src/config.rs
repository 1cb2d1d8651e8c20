use std::env;

/// Base address of the remote records API. No trailing slash.
pub fn resolve_api_url() -> String {
    env::var("HABIT_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string())
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_defaults_to_local_backend() {
        // Runs without HABIT_API_URL set in the normal test environment.
        if env::var("HABIT_API_URL").is_err() {
            assert_eq!(resolve_api_url(), "http://localhost:8080/api");
        }
    }
}
