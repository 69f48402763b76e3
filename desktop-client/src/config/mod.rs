mod client_config;
mod window_config;

pub use client_config::{get_config_manager, get_default_config_path, ClientConfig};
pub use window_config::WindowConfig;
