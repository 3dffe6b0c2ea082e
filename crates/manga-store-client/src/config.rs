use manga_store_lib::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute url of an API path, `path` is expected to start with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_url() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.url("/manga/popular"), "http://localhost:3000/manga/popular");

        let config = ClientConfig::default();
        assert_eq!(config.url("/user"), "http://localhost:3000/user");
    }

    #[test]
    fn test_deserialize_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
