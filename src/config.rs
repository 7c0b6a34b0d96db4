use std::fmt;

pub const DEFAULT_DATABASE_URL: &str = "mysql://root@127.0.0.1:3306/lab15";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LISTING_COURSE_ID: i64 = 5;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PUBLIC_DIR: &str = "./public";

/// Startup settings. Every field has a default so the app runs with no environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    /// Course whose students the listing page shows.
    pub listing_course_id: i64,
    pub public_dir: String,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            listing_course_id: DEFAULT_LISTING_COURSE_ID,
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment. Call [`load_dotenv`] first
    /// for `.env` values to be visible here.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_number(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            listing_course_id: parse_number(&lookup, "LISTING_COURSE_ID", defaults.listing_course_id)?,
            public_dir: lookup("PUBLIC_DIR").unwrap_or(defaults.public_dir),
        })
    }
}

/// Load `.env` from the working directory or a parent, if one exists.
/// Existing environment variables win over the file.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
