//! Public client surface + builder.
//! Internals are split into `session` (cookie store + bootstrap fetch), `rotation`
//! (identity table) and `constants` (endpoints + protocol values).

mod constants;
mod rotation;
mod session;

pub use constants::PLACEHOLDER_CORRELATION_ID;
pub(crate) use constants::{
    ACCEPT_ENCODING, ACCEPT_LANGUAGE, CANARY_COOKIE_NAMES, PAGE_ID, SCENARIO_ID, SIGNUP_ORIGIN,
    UI_FLAVOR,
};
pub use rotation::UserAgentRotation;
pub(crate) use session::Session;
pub use session::{PageSnapshot, SessionCookie};

use crate::core::ProbeError;
use crate::tokens::{StrategyChain, TokenExtractor};
use constants::{DEFAULT_API_URL, DEFAULT_BOOTSTRAP_URL, DEFAULT_TIMEOUT_SECS, USER_AGENTS};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Entry point for availability checks.
///
/// Cloning is cheap and clones share the identity rotation. Each check opens its
/// own [`Session`], so one client can serve concurrent checks.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    bootstrap_url: Url,
    api_url: Url,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    rotation: Arc<UserAgentRotation>,
    extractor: TokenExtractor,
    placeholder: String,
    debug: bool,
}

impl Default for ProbeClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ProbeClient {
    /// Create a new builder.
    pub fn builder() -> ProbeClientBuilder {
        ProbeClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn bootstrap_url(&self) -> &Url {
        &self.bootstrap_url
    }
    pub(crate) fn api_url(&self) -> &Url {
        &self.api_url
    }
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
    pub(crate) fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }
    pub(crate) fn extractor(&self) -> &TokenExtractor {
        &self.extractor
    }
    pub(crate) fn placeholder(&self) -> &str {
        &self.placeholder
    }
    pub(crate) fn debug(&self) -> bool {
        self.debug
    }

    /// The identity rotation shared by this client and its clones.
    pub fn rotation(&self) -> &UserAgentRotation {
        &self.rotation
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ProbeClientBuilder {
    user_agents: Option<Vec<String>>,
    bootstrap_url: Option<Url>,
    api_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    canary_strategies: Option<StrategyChain>,
    correlation_strategies: Option<StrategyChain>,
    config_markers: Option<Vec<String>>,
    correlation_cookies: Option<Vec<String>>,
    placeholder: Option<String>,
    debug: Option<bool>,
}

impl ProbeClientBuilder {
    /// Use a single fixed User-Agent instead of rotating.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agents = Some(vec![ua.into()]);
        self
    }

    /// Replace the rotation table. Must not be empty.
    #[must_use]
    pub fn user_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_agents = Some(agents.into_iter().map(Into::into).collect());
        self
    }

    /// Override the bootstrap page URL (query string included).
    #[must_use]
    pub fn bootstrap_url(mut self, url: Url) -> Self {
        self.bootstrap_url = Some(url);
        self
    }

    /// Override the availability API URL (query string included).
    #[must_use]
    pub fn api_url(mut self, url: Url) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Per-request timeout for each of the two calls. Default: 30 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the ordered canary strategies.
    #[must_use]
    pub fn canary_strategies(mut self, chain: StrategyChain) -> Self {
        self.canary_strategies = Some(chain);
        self
    }

    /// Replace the ordered correlation id strategies.
    #[must_use]
    pub fn correlation_strategies(mut self, chain: StrategyChain) -> Self {
        self.correlation_strategies = Some(chain);
        self
    }

    /// Script globals scanned for a config object when the page text has no canary.
    #[must_use]
    pub fn config_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_markers = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Cookie names that may carry a correlation id. Default: `uaid`.
    #[must_use]
    pub fn correlation_cookies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.correlation_cookies = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// The static id baked into the endpoint URLs, which must never be sent as live.
    #[must_use]
    pub fn placeholder_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.placeholder = Some(id.into());
        self
    }

    /// Print step diagnostics to stderr. Default: `SIGNUP_PROBE_DEBUG=1`.
    #[must_use]
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = Some(on);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if a default URL or pattern does not parse, or the identity table is empty.
    pub fn build(self) -> Result<ProbeClient, ProbeError> {
        let bootstrap_url = match self.bootstrap_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BOOTSTRAP_URL)?,
        };
        let api_url = match self.api_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_URL)?,
        };

        let rotation = match self.user_agents {
            Some(agents) => UserAgentRotation::new(agents)?,
            None => UserAgentRotation::new(USER_AGENTS)?,
        };

        let debug = self
            .debug
            .unwrap_or_else(|| std::env::var("SIGNUP_PROBE_DEBUG").ok().as_deref() == Some("1"));

        let canary = match self.canary_strategies {
            Some(c) => c,
            None => StrategyChain::default_canary()?,
        };
        let correlation = match self.correlation_strategies {
            Some(c) => c,
            None => StrategyChain::default_correlation()?,
        };
        let mut extractor = TokenExtractor::new(canary, correlation).debug(debug);
        if let Some(markers) = self.config_markers {
            extractor = extractor.config_markers(markers);
        }
        if let Some(names) = self.correlation_cookies {
            extractor = extractor.correlation_cookies(names);
        }

        Ok(ProbeClient {
            bootstrap_url,
            api_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self.connect_timeout,
            rotation: Arc::new(rotation),
            extractor,
            placeholder: self
                .placeholder
                .unwrap_or_else(|| PLACEHOLDER_CORRELATION_ID.to_string()),
            debug,
        })
    }
}
