use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Sereno";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the application data directory
/// ~/Sereno/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Sereno")
}

/// Path of the mood-log database
pub fn db_path() -> PathBuf {
    app_data_dir().join("sereno.db")
}

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Ollama endpoint for the optional LLM assist.
/// Override with SERENO_OLLAMA_URL.
pub fn ollama_base_url() -> String {
    std::env::var("SERENO_OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Sereno"));
    }

    #[test]
    fn db_path_under_app_data() {
        let db = db_path();
        assert!(db.starts_with(app_data_dir()));
        assert!(db.ends_with("sereno.db"));
    }

    #[test]
    fn app_name_is_sereno() {
        assert_eq!(APP_NAME, "Sereno");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.4.0");
    }

    #[test]
    fn ollama_url_has_default() {
        // Only meaningful when the override is unset, which is the
        // normal test environment.
        if std::env::var("SERENO_OLLAMA_URL").is_err() {
            assert_eq!(ollama_base_url(), "http://localhost:11434");
        }
    }
}
