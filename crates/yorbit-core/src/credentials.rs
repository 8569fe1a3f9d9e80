use crate::error::ConfigError;

/// Environment variable holding the Orbit workspace ID.
pub const ORBIT_WORKSPACE_ID_VAR: &str = "ORBIT_WORKSPACE_ID";
/// Environment variable holding the Orbit API key.
pub const ORBIT_API_KEY_VAR: &str = "ORBIT_API_KEY";
/// Environment variable holding the YouTube Data API key.
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the default YouTube channel ID (optional).
pub const YOUTUBE_CHANNEL_ID_VAR: &str = "YOUTUBE_CHANNEL_ID";

/// Fully resolved credential set shared by every request-issuing client.
///
/// Immutable after resolution; clients take copies of the fields they need.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub orbit_workspace_id: String,
    pub orbit_api_key: String,
    pub youtube_api_key: String,
    /// Default channel to sync when the caller does not pass one explicitly.
    pub youtube_channel_id: Option<String>,
}

/// Explicit credential overrides. Any field left as `None` (or set to an
/// empty string) falls back to the corresponding environment variable.
#[derive(Debug, Clone, Default)]
pub struct CredentialArgs {
    pub orbit_workspace_id: Option<String>,
    pub orbit_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
    pub youtube_channel_id: Option<String>,
}

/// Resolve credentials from explicit arguments and environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] if a required value is absent
/// from both sources.
pub fn resolve_credentials(args: &CredentialArgs) -> Result<Credentials, ConfigError> {
    dotenvy::dotenv().ok();
    resolve_credentials_from_env(args)
}

/// Resolve credentials from environment variables already in the process.
///
/// Unlike [`resolve_credentials`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] if a required value is absent
/// from both sources.
pub fn resolve_credentials_from_env(args: &CredentialArgs) -> Result<Credentials, ConfigError> {
    build_credentials(args, |key| std::env::var(key))
}

/// Build the credential set using the provided env-var lookup function.
///
/// This is the core resolution logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. An explicit argument always wins over the environment; empty
/// strings count as absent on both sides.
fn build_credentials<F>(args: &CredentialArgs, lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    let resolve = |explicit: &Option<String>, env_var: &'static str| -> Option<String> {
        non_empty(explicit.clone()).or_else(|| non_empty(lookup(env_var).ok()))
    };

    let require = |explicit: &Option<String>,
                   name: &'static str,
                   env_var: &'static str|
     -> Result<String, ConfigError> {
        resolve(explicit, env_var).ok_or(ConfigError::MissingCredential { name, env_var })
    };

    Ok(Credentials {
        orbit_workspace_id: require(
            &args.orbit_workspace_id,
            "an Orbit workspace ID",
            ORBIT_WORKSPACE_ID_VAR,
        )?,
        orbit_api_key: require(&args.orbit_api_key, "an Orbit API key", ORBIT_API_KEY_VAR)?,
        youtube_api_key: require(
            &args.youtube_api_key,
            "a YouTube API key",
            YOUTUBE_API_KEY_VAR,
        )?,
        youtube_channel_id: resolve(&args.youtube_channel_id, YOUTUBE_CHANNEL_ID_VAR),
    })
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
