//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Default point store backend
pub const DEFAULT_STORE_BACKEND: &str = "memory";

/// Default dataset directory (one `<REGION>.txt` file per dataset)
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default dataset files to import at startup, by country code
pub const DEFAULT_DATASETS: &[&str] = &["US"];

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "georadius";
