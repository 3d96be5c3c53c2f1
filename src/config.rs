use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Remote agreement API
    pub api_base: String,
    pub request_timeout_secs: u64,

    // Preference persistence
    pub preferences_file: String,

    // Uploads
    pub max_upload_bytes: u64,

    // Promotional popup timing
    pub popup_initial_delay_secs: u64,
    pub popup_idle_threshold_secs: u64,
    pub popup_check_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Agreement API
            api_base: std::env::var("AGREEMENT_API_BASE")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),

            // Preferences
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "preferences.json".to_string()),

            // Uploads (5 MiB cap, matching the booking form)
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 5 * 1024 * 1024),

            // Popup timing
            popup_initial_delay_secs: env_or("POPUP_INITIAL_DELAY_SECS", 30),
            popup_idle_threshold_secs: env_or("POPUP_IDLE_THRESHOLD_SECS", 300),
            popup_check_interval_secs: env_or("POPUP_CHECK_INTERVAL_SECS", 60),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
