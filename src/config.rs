use anyhow::{ensure, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub client_password: String,
    pub admin_password: String,
    /// Directory served for any path the API router does not claim.
    pub static_dir: String,
    /// Random products created at startup (0 = start with an empty catalog).
    pub seed_count: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_password = lookup("CLIENT_PASSWORD").context("CLIENT_PASSWORD must be set")?;
        let admin_password = lookup("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

        ensure!(!client_password.is_empty(), "CLIENT_PASSWORD must not be empty");
        ensure!(!admin_password.is_empty(), "ADMIN_PASSWORD must not be empty");
        ensure!(
            client_password != admin_password,
            "CLIENT_PASSWORD and ADMIN_PASSWORD must differ"
        );

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            client_password,
            admin_password,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "frontend".to_string()),
            seed_count: lookup("SEED_PRODUCTS")
                .unwrap_or_else(|| "0".to_string())
                .parse()
                .context("SEED_PRODUCTS must be a non-negative number")?,
        })
    }
}
