use anyhow::{Context, Result};

/// Token lifetime used when JWT_TTL is not configured.
pub const DEFAULT_JWT_TTL_SECS: i64 = 604_800;

/// Pool size used when DATABASE_MAX_CONNECTIONS is not configured.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub ttl_secs: i64,
    pub audience: Option<String>,
    pub issuer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt: JwtSettings,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let ttl_secs = match std::env::var("JWT_TTL") {
            Ok(raw) => raw
                .parse::<i64>()
                .context("JWT_TTL must be a number of seconds")?,
            Err(_) => DEFAULT_JWT_TTL_SECS,
        };

        let audience = std::env::var("JWT_AUDIENCE").ok();
        let issuer = std::env::var("JWT_ISSUER").ok();

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            jwt: JwtSettings {
                secret,
                ttl_secs,
                audience,
                issuer,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_applies_defaults_for_optional_vars() {
        // set_var is unsafe on edition 2024; this is the only test touching
        // these variables
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/app");
            std::env::set_var("PORT", "8080");
            std::env::set_var("JWT_SECRET", "test-secret");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::remove_var("JWT_TTL");
            std::env::remove_var("JWT_AUDIENCE");
            std::env::remove_var("JWT_ISSUER");
        }

        let config = Config::init().unwrap();

        assert_eq!(config.database_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(config.jwt.ttl_secs, DEFAULT_JWT_TTL_SECS);
        assert!(config.jwt.audience.is_none());
        assert!(config.jwt.issuer.is_none());
    }
}
