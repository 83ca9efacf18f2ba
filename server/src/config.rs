use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub uploads_dir: PathBuf,
    pub models_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3001"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            uploads_dir: try_load("UPLOADS_DIR", "uploads"),
            models_dir: try_load("MODELS_DIR", "models"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match raw.parse() {
        Ok(value) => value,
        Err(e) => panic!("Invalid {key} value {raw:?}: {e}"),
    }
}
