use std::env;

use anyhow::Context;

/// Settings read from the environment, after `.env` has been loaded.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Seeds the sample recipes into an empty store at startup.
    pub load_bootstrap_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
        let host = env::var("HOST").context("HOST is not set in .env file")?;
        let port = env::var("PORT")
            .context("PORT is not set in .env file")?
            .parse()
            .context("PORT is not a valid port number")?;
        let load_bootstrap_data = match env::var("LOAD_BOOTSTRAP_DATA") {
            Ok(value) => value
                .parse()
                .context("LOAD_BOOTSTRAP_DATA must be true or false")?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            host,
            port,
            load_bootstrap_data,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
