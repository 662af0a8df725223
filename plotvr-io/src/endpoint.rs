//! Endpoint normalization
//!
//! Every endpoint is pointed at the configured resource (`data.json`) in the
//! directory of its path, and given the default port when it has none.

use crate::config::LoaderConfig;
use crate::error::IoError;
use std::fmt;
use url::Url;

/// A resolved data endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    data_url: Url,
}

impl Endpoint {
    /// Resolve a user-supplied endpoint. A missing scheme means `http`.
    pub fn resolve(raw: &str, config: &LoaderConfig) -> Result<Self, IoError> {
        let raw = raw.trim();
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("http://{raw}")
        };
        let mut url = Url::parse(&candidate).map_err(|err| IoError::InvalidEndpoint {
            endpoint: raw.to_string(),
            message: err.to_string(),
        })?;

        point_at_resource(&mut url, &config.resource_name);

        if url.scheme() != "file" && url.has_host() && url.port().map_or(true, |port| port < 10) {
            url.set_port(Some(config.default_port))
                .map_err(|()| IoError::InvalidEndpoint {
                    endpoint: raw.to_string(),
                    message: "endpoint cannot carry a port".to_string(),
                })?;
        }

        Ok(Self { data_url: url })
    }

    /// The endpoint used when none is supplied
    pub fn default_for(config: &LoaderConfig) -> Result<Self, IoError> {
        let raw = format!("http://{}/{}", config.default_host, config.resource_name);
        Url::parse(&raw)
            .map(|data_url| Self { data_url })
            .map_err(|err| IoError::InvalidEndpoint {
                endpoint: raw,
                message: err.to_string(),
            })
    }

    pub fn data_url(&self) -> &Url {
        &self.data_url
    }

    pub fn as_str(&self) -> &str {
        self.data_url.as_str()
    }

    pub fn is_local_file(&self) -> bool {
        self.data_url.scheme() == "file"
    }

    /// Websocket address of the control channel on the same host and port
    pub fn control_address(&self) -> Option<String> {
        if self.is_local_file() {
            return None;
        }
        let host = self.data_url.host_str()?;
        let port = self.data_url.port_or_known_default()?;
        Some(format!("ws://{host}:{port}"))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn point_at_resource(url: &mut Url, resource: &str) {
    let path = url.path();
    let last = path.rsplit('/').next().unwrap_or_default();
    if last == resource {
        return;
    }
    let directory = match path.rfind('/') {
        Some(end) => &path[..=end],
        None => "/",
    };
    let normalized = format!("{directory}{resource}");
    url.set_path(&normalized);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str) -> String {
        Endpoint::resolve(raw, &LoaderConfig::default())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_last_segment_replaced() {
        assert_eq!(
            resolve("http://example.org:8080/plots/index.html"),
            "http://example.org:8080/plots/data.json"
        );
        assert_eq!(
            resolve("http://example.org:8080/plots/"),
            "http://example.org:8080/plots/data.json"
        );
        assert_eq!(
            resolve("http://example.org:8080"),
            "http://example.org:8080/data.json"
        );
    }

    #[test]
    fn test_resource_kept() {
        assert_eq!(
            resolve("http://example.org:9000/a/data.json"),
            "http://example.org:9000/a/data.json"
        );
    }

    #[test]
    fn test_default_port() {
        assert_eq!(
            resolve("http://example.org/plots/x"),
            "http://example.org:2908/plots/data.json"
        );
        assert_eq!(
            resolve("http://example.org:5/plots/x"),
            "http://example.org:2908/plots/data.json"
        );
        assert_eq!(resolve("example.org:9000"), "http://example.org:9000/data.json");
    }

    #[test]
    fn test_control_address() {
        let endpoint =
            Endpoint::resolve("http://example.org/plots/", &LoaderConfig::default()).unwrap();
        assert_eq!(endpoint.control_address().as_deref(), Some("ws://example.org:2908"));
    }

    #[test]
    fn test_default_endpoint() {
        let config = LoaderConfig::default();
        let endpoint = Endpoint::default_for(&config).unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:9454/data.json");
        assert_eq!(endpoint.control_address().as_deref(), Some("ws://localhost:9454"));
    }

    #[test]
    fn test_file_endpoint() {
        let endpoint =
            Endpoint::resolve("file:///tmp/plots/plot.json", &LoaderConfig::default()).unwrap();
        assert_eq!(endpoint.as_str(), "file:///tmp/plots/data.json");
        assert!(endpoint.is_local_file());
        assert_eq!(endpoint.control_address(), None);
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = Endpoint::resolve("http://[::1", &LoaderConfig::default());
        assert!(matches!(result, Err(IoError::InvalidEndpoint { .. })));
    }
}
