use tracing::info;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: var_or("DATABASE_URL", "sqlite://messages.db?mode=rwc"),
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8080"),
        }
    }
}

// dotenv::var checks the process environment first, then .env
fn var_or(key: &str, default: &str) -> String {
    match dotenv::var(key) {
        Ok(value) => value,
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_owned()
        }
    }
}
