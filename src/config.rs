//! Client Configuration
//!
//! Build-time settings. The API location comes from `SOUNDFOOD_API_URL` at
//! compile time and defaults to the same-origin `/api` prefix.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "/api";

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 3_000;

pub fn api_base_url() -> &'static str {
    option_env!("SOUNDFOOD_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join the API base and an endpoint path with exactly one slash
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("/api", "/menus"), "/api/menus");
        assert_eq!(endpoint("/api/", "menus/3/dishes"), "/api/menus/3/dishes");
        assert_eq!(endpoint("https://soundfood.example/v1//", "//dishes/2"), "https://soundfood.example/v1/dishes/2");
    }
}
