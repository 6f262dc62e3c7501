use clap::Parser;
use dotenvy::dotenv;

/// Default backend base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The base URL of the tournament platform API under test.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// The email of the account used to authenticate fixture requests.
    #[arg(long, env, default_value = "e2e-fixtures@example.com")]
    api_email: String,

    /// The password of the account used to authenticate fixture requests.
    #[arg(long, env, default_value = "password")]
    api_password: String,
}

impl Config {
    /// Loads a `.env` file from the working directory into the process
    /// environment so env-backed args pick its values up. Call before
    /// parsing; existing environment variables win over `.env` entries.
    pub fn load_env() {
        dotenv().ok();
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn set_api_base_url(mut self, api_base_url: String) -> Self {
        self.api_base_url = api_base_url;
        self
    }

    pub fn api_email(&self) -> &str {
        &self.api_email
    }

    pub fn api_password(&self) -> &str {
        &self.api_password
    }

    pub fn set_credentials(mut self, email: String, password: String) -> Self {
        self.api_email = email;
        self.api_password = password;
        self
    }
}
