//! Runtime configuration resolved from the function environment.

/// Name of the environment variable overriding the table name.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Default DynamoDB table holding the image metadata records.
pub const DEFAULT_TABLE_NAME: &str = "ImageMetadata";

/// Settings for one function process, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table scanned on every invocation.
    pub table_name: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        let table_name = std::env::var(TABLE_NAME_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        Self { table_name }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}
