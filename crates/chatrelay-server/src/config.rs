use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    backend: BackendSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BackendSection {
    #[serde(default = "default_backend_url")]
    url: String,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000/api/chat".to_string()
}

impl RelayConfig {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(file_config) = load_from_file()? {
            return Ok(Self {
                host: file_config.server.host,
                port: file_config.server.port,
                backend_url: file_config.backend.url,
            });
        }

        Ok(Self::from_env())
    }

    fn from_env() -> Self {
        let host = env::var("CHATRELAY_SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = env::var("CHATRELAY_SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);
        let backend_url =
            env::var("CHATRELAY_BACKEND_URL").unwrap_or_else(|_| default_backend_url());

        Self {
            host,
            port,
            backend_url,
        }
    }
}

fn load_from_file() -> anyhow::Result<Option<FileConfig>> {
    let config_path = env::var("CHATRELAY_CONFIG").ok();
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new("relay.toml").exists() {
        Some("relay.toml".to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.backend.url, "http://127.0.0.1:8000/api/chat");
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [backend]
            url = "http://chat-backend:8000/api/chat"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.backend.url, "http://chat-backend:8000/api/chat");
    }
}
