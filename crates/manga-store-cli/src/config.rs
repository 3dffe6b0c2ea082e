use std::path::Path;

use manga_store_client::ClientConfig;

pub fn load(path: Option<&Path>) -> Result<ClientConfig, anyhow::Error> {
    match path {
        Some(path) => {
            info!("Open config from {:?}", path);
            let file = std::fs::File::open(path)?;
            Ok(serde_yml::from_reader(file)?)
        }
        None => Ok(ClientConfig::default()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = load(None).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_parse_yaml() {
        let config: ClientConfig = serde_yml::from_str("base_url: https://store.example.com\n").unwrap();
        assert_eq!(config.base_url, "https://store.example.com");
    }
}
