//! Loader configuration

/// Where data is fetched from when the endpoint leaves it open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Port used when the endpoint has none, or one below 10
    pub default_port: u16,
    /// `host:port` used when no endpoint is given at all
    pub default_host: String,
    /// Resource every endpoint path is normalized to
    pub resource_name: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_port: 2908,
            default_host: "localhost:9454".to_string(),
            resource_name: "data.json".to_string(),
        }
    }
}
