use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub data_service: DataServiceConfig,
    pub view_state: ViewStateConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Settings for the in-memory admin data service
#[derive(Debug, Clone)]
pub struct DataServiceConfig {
    /// JSON seed file; the bundled data set is used when unset
    pub seed_data_path: Option<PathBuf>,
    /// Whether operations sleep for their simulated latency
    pub simulated_latency: bool,
    /// Fixed seed for the activity history generator (OS entropy when unset)
    pub activity_rng_seed: Option<u64>,
}

/// Where the persisted dashboard preferences live
#[derive(Debug, Clone)]
pub struct ViewStateConfig {
    pub storage_dir: PathBuf,
    /// When false the state lives in memory only
    pub persist: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            data_service: DataServiceConfig::from_env()?,
            view_state: ViewStateConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DataServiceConfig {
    pub fn from_env() -> Result<Self, String> {
        let seed_data_path = env::var("SEED_DATA_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let simulated_latency = match env::var("SIMULATED_LATENCY") {
            Ok(value) => parse_flag("SIMULATED_LATENCY", &value)?,
            Err(_) => true,
        };

        let activity_rng_seed = env::var("ACTIVITY_RNG_SEED")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| "ACTIVITY_RNG_SEED must be a valid number".to_string())
            })
            .transpose()?;

        Ok(Self {
            seed_data_path,
            simulated_latency,
            activity_rng_seed,
        })
    }
}

impl ViewStateConfig {
    pub fn from_env() -> Result<Self, String> {
        let storage_dir = env::var("VIEW_STATE_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".view-state"));

        let persist = match env::var("VIEW_STATE_PERSIST") {
            Ok(value) => parse_flag("VIEW_STATE_PERSIST", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            storage_dir,
            persist,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Society Admin API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the society admin console".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

/// Parses a boolean environment flag (`true/false`, `1/0`, `yes/no`, `on/off`)
fn parse_flag(name: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("{} must be a boolean (true/false)", name)),
    }
}
