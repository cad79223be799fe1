pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, BackendConfig, ExportConfig};
pub use loader::{CONFIG_FILE, load_config, parse_config_content};
