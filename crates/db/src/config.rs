use sqlx::postgres::PgConnectOptions;

/// Error raised when an environment variable is missing or unparsable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Read an optional variable and parse it, falling back to `default`.
///
/// Shared by every config loader in the workspace so errors read the same.
pub fn parse_var<T, F>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}

/// Database connection parameters loaded from environment variables.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_NAME`            | required    |
    /// | `DB_USER`            | required    |
    /// | `DB_PASSWORD`        | none        |
    /// | `DB_MAX_CONNECTIONS` | `20`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
        let port = parse_var(&lookup, "DB_PORT", "u16", 5432)?;
        let name = lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
        let password = lookup("DB_PASSWORD");
        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", "u32", 20)?;

        Ok(Self {
            host,
            port,
            name,
            user,
            password,
            max_connections,
        })
    }

    /// Translate into sqlx connect options.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

// Keeps the password out of startup logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
