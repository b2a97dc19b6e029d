/// Per-invocation option resolution: command flag > global flag > env > default.
use std::env;

/// Built-in default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://worldbook.it.com";

/// Environment variable overriding the default base URL.
pub const BASE_URL_ENV: &str = "WORLDBOOK_BASE_URL";

/// Option overrides contributed by one flag layer (command-local or global).
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    /// `--json` flag.
    pub json: bool,
    /// `--base-url` value.
    pub base_url: Option<&'a str>,
}

/// Effective configuration for one command invocation.
///
/// Computed fresh per command; never cached across invocations.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// Emit JSON instead of plain text.
    pub json: bool,
    /// API base URL, normalized to have no trailing slash.
    pub base_url: String,
}

impl EffectiveConfig {
    /// Resolve from the two flag layers plus an explicit environment value.
    ///
    /// `json` is on when either layer sets it. `base_url` is the first
    /// non-empty candidate among the local flag, the global flag, the
    /// environment value, and [`DEFAULT_BASE_URL`]. Resolution never fails.
    #[must_use]
    pub fn resolve(
        local: Overrides<'_>,
        global: Overrides<'_>,
        env_base_url: Option<&str>,
    ) -> Self {
        let base_url = [local.base_url, global.base_url, env_base_url]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Self {
            json: local.json || global.json,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Resolve using the real process environment.
    #[must_use]
    pub fn from_env(local: Overrides<'_>, global: Overrides<'_>) -> Self {
        let env_base_url = env::var(BASE_URL_ENV).ok();
        Self::resolve(local, global, env_base_url.as_deref())
    }
}

/// Strip all trailing slashes.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}
