use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use rolekeeper_core::{Actor, AppError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub role_seed_path: Option<PathBuf>,
    pub default_actor: Actor,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = match env::var("API_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            Err(_) => 3001,
        };

        let role_seed_path = env::var("ROLE_SEED_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let default_actor = env::var("DEFAULT_ACTOR").unwrap_or_else(|_| "admin".to_owned());
        let default_actor = Actor::new(default_actor)
            .map_err(|_| AppError::Validation("DEFAULT_ACTOR must not be empty".to_owned()))?;

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            role_seed_path,
            default_actor,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use rolekeeper_core::Actor;

    use super::ApiConfig;

    fn config(api_host: &str) -> ApiConfig {
        ApiConfig {
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: api_host.to_owned(),
            api_port: 3001,
            role_seed_path: None,
            default_actor: Actor::system(),
        }
    }

    #[test]
    fn socket_address_combines_host_and_port() {
        let address = config("0.0.0.0").socket_address();
        assert!(address.is_ok());
        assert_eq!(
            address.map(|value| value.to_string()).unwrap_or_default(),
            "0.0.0.0:3001"
        );
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        assert!(config("localhost").socket_address().is_err());
    }
}
