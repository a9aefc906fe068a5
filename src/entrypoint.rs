//! Resolution of the API entrypoint used by the admin page.

use regex::Regex;
use std::env;
use std::sync::OnceLock;
use url::Url;

use crate::{error::Error, Result};

/// Path of the API relative to the host.
pub const API_PATH: &str = "/api";

/// Environment variable with the explicit entrypoint.
pub const ENTRYPOINT_VAR: &str = "API_ENTRYPOINT";

static API_SEGMENT: OnceLock<Regex> = OnceLock::new();

static DEFAULT_ENTRYPOINT: OnceLock<String> = OnceLock::new();

fn api_segment() -> &'static Regex {
    API_SEGMENT.get_or_init(|| Regex::new(r"/api(/|$)").expect("api segment pattern is valid"))
}

/// Where the resolution runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionContext {
    /// Outside a browser, only the configuration is known.
    Server,
    /// In a browser page with the given origin, e.g. `https://example.com`.
    Browser { origin: String },
}

impl ExecutionContext {
    /// Creates a browser context from the full location of the page.
    ///
    /// # Errors
    ///
    /// The method fails if the location isn't an absolute URL
    /// with a host.
    pub fn browser(location: &str) -> Result<Self> {
        let url = Url::parse(location.trim())
            .map_err(|e| Error::InvalidLocation(format!("{}: {}", location, e)))?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(Error::InvalidLocation(location.to_string()));
        }

        Ok(ExecutionContext::Browser {
            origin: origin.ascii_serialization(),
        })
    }
}

/// Configured entrypoint override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntrypointConfig {
    entrypoint: Option<String>,
}

impl EntrypointConfig {
    /// Creates a configuration with an explicit entrypoint.
    pub fn new(entrypoint: &str) -> Self {
        EntrypointConfig {
            entrypoint: Some(entrypoint.to_string()),
        }
    }

    /// Reads the entrypoint from the `API_ENTRYPOINT` variable.
    pub fn from_env() -> Self {
        let entrypoint = env::var(ENTRYPOINT_VAR).ok();
        debug!("{}: {:?}", ENTRYPOINT_VAR, entrypoint);

        EntrypointConfig { entrypoint }
    }

    /// Returns the configured entrypoint.
    #[inline]
    pub fn entrypoint(&self) -> Option<&str> {
        self.entrypoint.as_deref()
    }
}

/// Returns the base URL of the API.
///
/// The configured entrypoint wins over the page origin. The result
/// always has the `/api` segment and no trailing slash.
///
/// # Examples
///
/// ```rust
/// # use routes_planner::{resolve_entrypoint, EntrypointConfig, ExecutionContext};
/// #
/// let config = EntrypointConfig::new("https://example.com/api/");
///
/// assert_eq!(
///     resolve_entrypoint(&ExecutionContext::Server, &config),
///     "https://example.com/api"
/// );
/// assert_eq!(
///     resolve_entrypoint(&ExecutionContext::Server, &EntrypointConfig::default()),
///     "/api"
/// );
/// ```
pub fn resolve_entrypoint(context: &ExecutionContext, config: &EntrypointConfig) -> String {
    let base = match context {
        ExecutionContext::Server => config.entrypoint(),
        ExecutionContext::Browser { origin } => config.entrypoint().or(Some(origin.as_str())),
    };

    let entrypoint = match base {
        Some(b) if !b.is_empty() => ensure_api_path(b),
        _ => API_PATH.to_string(),
    };
    debug!("entrypoint: {}", entrypoint);

    entrypoint
}

/// Returns the entrypoint from the environment outside a browser.
/// It is resolved once per process.
pub fn default_entrypoint() -> &'static str {
    DEFAULT_ENTRYPOINT.get_or_init(|| {
        resolve_entrypoint(&ExecutionContext::Server, &EntrypointConfig::from_env())
    })
}

fn ensure_api_path(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');

    if api_segment().is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, API_PATH)
    }
}
