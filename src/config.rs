use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Payment gateway the relay forwards to
    pub gateway_url: String,

    // Front-end assets served at /
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "9200".to_string())
                .parse()
                .context("Invalid PORT")?,

            gateway_url: std::env::var("GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:9110".to_string()),

            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.gateway_url.starts_with("http") {
            bail!("GATEWAY_URL must be HTTP(S) URL");
        }

        tracing::info!("Configuration validated, gateway at {}", self.gateway_url);

        Ok(())
    }
}
