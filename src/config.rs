use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// Directory holding one JSON grid file per sheet.
    pub data_dir: String,
    /// Lifetime of issued auth tokens, in seconds.
    pub token_ttl_secs: u64,

    // Rate limiting
    pub rate_exec_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string()) // default 1 hour
                .parse()
                .unwrap(),
            rate_exec_per_min: env::var("RATE_EXEC_PER_MIN")
                .unwrap_or_else(|_| "240".to_string())
                .parse()
                .unwrap(),
        }
    }
}
