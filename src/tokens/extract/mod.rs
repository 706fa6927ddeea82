mod helpers;
mod strategies;

pub use strategies::{
    CANARY_PATTERNS, CONFIG_MARKERS, CORRELATION_PATTERNS, PatternStrategy, StrategyChain,
    TryExtract,
};

use helpers::truncate;

use crate::core::PageSnapshot;
use crate::core::client::CANARY_COOKIE_NAMES;
use crate::tokens::scripts::config_objects;

/// Where a canary token was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Page text, via the strategy at this index.
    Body(usize),
    /// A bootstrap response cookie with this name.
    Cookie(String),
    /// A script config object, via the strategy at this index.
    ScriptConfig(usize),
}

/// Applies the canary and correlation strategy chains to a bootstrap page.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    canary: StrategyChain,
    correlation: StrategyChain,
    config_markers: Vec<String>,
    correlation_cookies: Vec<String>,
    debug: bool,
}

impl TokenExtractor {
    pub fn new(canary: StrategyChain, correlation: StrategyChain) -> Self {
        Self {
            canary,
            correlation,
            config_markers: CONFIG_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            correlation_cookies: vec!["uaid".to_string()],
            debug: false,
        }
    }

    /// The built-in chains, markers and cookie names.
    ///
    /// # Errors
    ///
    /// Only if a built-in pattern fails to compile.
    pub fn with_defaults() -> Result<Self, crate::ProbeError> {
        Ok(Self::new(
            StrategyChain::default_canary()?,
            StrategyChain::default_correlation()?,
        ))
    }

    /// Script globals scanned by the config-object fallback.
    #[must_use]
    pub fn config_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Cookie names consulted when no correlation id is in the page text.
    #[must_use]
    pub fn correlation_cookies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.correlation_cookies = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    /// Find the canary: page text, then the `amcanary`/`canary` cookies, then script
    /// config objects. The first path that yields a value wins.
    pub fn extract_canary(&self, snapshot: &PageSnapshot) -> Option<(TokenSource, String)> {
        if let Some((i, token)) = self.canary.first_match(&snapshot.body) {
            self.trace("canary", &format!("body strategy {i} `{}`", self.canary.name_at(i)), &token);
            return Some((TokenSource::Body(i), token));
        }

        if let Some(c) = snapshot
            .cookies
            .iter()
            .find(|c| CANARY_COOKIE_NAMES.contains(&c.name.as_str()) && !c.value.is_empty())
        {
            self.trace("canary", &format!("cookie `{}`", c.name), &c.value);
            return Some((TokenSource::Cookie(c.name.clone()), c.value.clone()));
        }

        for object in config_objects(&snapshot.body, &self.config_markers) {
            if let Some((i, token)) = self.canary.first_match(&object) {
                self.trace(
                    "canary",
                    &format!("script config strategy {i} `{}`", self.canary.name_at(i)),
                    &token,
                );
                return Some((TokenSource::ScriptConfig(i), token));
            }
        }

        if self.debug {
            eprintln!("SIGNUP_PROBE_DEBUG [extract_canary]: all paths exhausted; no canary.");
        }
        None
    }

    /// Correlation id candidate from the page text, else from a session cookie.
    pub fn extract_correlation(&self, snapshot: &PageSnapshot) -> Option<String> {
        if let Some((i, id)) = self.correlation.first_match(&snapshot.body) {
            self.trace("correlation", &format!("body strategy {i}"), &id);
            return Some(id);
        }

        let names: Vec<&str> = self.correlation_cookies.iter().map(String::as_str).collect();
        let id = snapshot.cookie_value(&names).filter(|v| !v.is_empty())?;
        self.trace("correlation", "cookie", id);
        Some(id.to_string())
    }

    fn trace(&self, what: &str, path: &str, value: &str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(token = what, path, "token extracted");

        if self.debug {
            eprintln!(
                "SIGNUP_PROBE_DEBUG [extract_{what}]: hit via {path}; value=`{}`",
                truncate(value, 24)
            );
        }
    }
}
