use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub demo: DemoConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Demo data seeding
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "booking_system=debug,tower_http=debug".to_string()),
            },
            demo: DemoConfig {
                enabled: env::var("LOAD_DEMO_DATA")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("LOAD_DEMO_DATA must be true or false"),
            },
        }
    }
}
