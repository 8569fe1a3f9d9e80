use thiserror::Error;

/// Errors raised while resolving workspace configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential was supplied neither as an argument nor through
    /// its environment variable.
    #[error("you must provide {name} or set the {env_var} environment variable")]
    MissingCredential {
        name: &'static str,
        env_var: &'static str,
    },
}
