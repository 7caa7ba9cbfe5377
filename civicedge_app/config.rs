use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub sync_interval_secs: u64,
    pub probe_interval_secs: u64,
    pub backoff_base_secs: u64,
    pub backoff_max_secs: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_base_url = match env::var("CIVICEDGE_API_BASE_URL") {
            Ok(val) => val,
            Err(_) => "https://people-eye-server.onrender.com".to_string(),
        };

        let data_dir = match env::var("CIVICEDGE_DATA_DIR") {
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from("data"),
        };

        let sync_interval_secs = match env::var("CIVICEDGE_SYNC_INTERVAL_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(60).max(1),
            Err(_) => 60,
        };

        let probe_interval_secs = match env::var("CIVICEDGE_PROBE_INTERVAL_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(30).max(1),
            Err(_) => 30,
        };

        let backoff_base_secs = match env::var("CIVICEDGE_BACKOFF_BASE_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(5).max(1),
            Err(_) => 5,
        };

        let backoff_max_secs = match env::var("CIVICEDGE_BACKOFF_MAX_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(300),
            Err(_) => 300,
        };

        let http_timeout_secs = match env::var("CIVICEDGE_HTTP_TIMEOUT_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(30).max(1),
            Err(_) => 30,
        };

        Self {
            api_base_url,
            data_dir,
            sync_interval_secs,
            probe_interval_secs,
            backoff_base_secs,
            backoff_max_secs,
            http_timeout_secs,
        }
    }

    pub fn queue_path(&self) -> PathBuf {
        self.data_dir.join("pending_reports.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("known_users.json")
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Config {
    /// Small intervals so tests never wait on wall-clock defaults.
    pub fn for_tests() -> Self {
        Self {
            api_base_url: "http://localhost:0".to_string(),
            data_dir: std::env::temp_dir(),
            sync_interval_secs: 1,
            probe_interval_secs: 1,
            backoff_base_secs: 1,
            backoff_max_secs: 8,
            http_timeout_secs: 1,
        }
    }
}
