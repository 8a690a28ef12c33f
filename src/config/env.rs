use std::env;

pub const API_KEY_VAR: &str = "TRACKER_API_KEY";
pub const DIRECTORY_ENDPOINT_VAR: &str = "TRACKER_DIRECTORY_ENDPOINT";
pub const TRACKING_ENDPOINT_VAR: &str = "TRACKER_TRACKING_ENDPOINT";

/// Settings read from the process environment. Every field is optional here;
/// the key becomes required when the layers are resolved.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub directory_endpoint: Option<String>,
    pub tracking_endpoint: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            api_key: non_empty(API_KEY_VAR),
            directory_endpoint: non_empty(DIRECTORY_ENDPOINT_VAR),
            tracking_endpoint: non_empty(TRACKING_ENDPOINT_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_known_vars() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (API_KEY_VAR, "secret"),
            (TRACKING_ENDPOINT_VAR, "http://localhost:9000/trackingInfo"),
            (DIRECTORY_ENDPOINT_VAR, "  "),
        ]);

        let config = EnvConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.tracking_endpoint.as_deref(),
            Some("http://localhost:9000/trackingInfo")
        );
        assert_eq!(config.directory_endpoint, None);
    }
}
