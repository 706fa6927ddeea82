use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::core::ProbeError;

/// Canary patterns, most specific first.
pub const CANARY_PATTERNS: [&str; 4] = [
    r#""apiCanary":"([^"]+)""#,
    r#"apiCanary['"]?\s*:\s*['"]([^'"]+)['"]"#,
    r#"canary['"]?\s*:\s*['"]([^'"]+)['"]"#,
    r#""canary":"([^"]+)""#,
];

/// Correlation id patterns, most specific first.
pub const CORRELATION_PATTERNS: [&str; 4] = [
    r#""correlationId":"([^"]+)""#,
    r#"correlationId['"]?\s*:\s*['"]([^'"]+)['"]"#,
    r#"sUnauthSessionID['"]?\s*:\s*['"]([^'"]+)['"]"#,
    r#""uaid":"([^"]+)""#,
];

/// Script globals whose object literal may carry the canary.
pub const CONFIG_MARKERS: [&str; 3] = ["ServerData", "$Config", "__CONFIG__"];

/// One way of pulling a single value out of a text blob.
pub trait TryExtract: Send + Sync + fmt::Debug {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// The extracted value, or `None` when this strategy does not apply.
    fn try_extract(&self, text: &str) -> Option<String>;
}

/// A regex with one capture group; the group's text is the extracted value.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    re: Regex,
}

impl PatternStrategy {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Pattern` if the regex is invalid, or `ProbeError::Config`
    /// if it has no capture group.
    pub fn new(pattern: &str) -> Result<Self, ProbeError> {
        let re = Regex::new(pattern)?;
        if re.captures_len() < 2 {
            return Err(ProbeError::Config(format!(
                "pattern `{pattern}` has no capture group"
            )));
        }
        Ok(Self { re })
    }
}

impl TryExtract for PatternStrategy {
    fn name(&self) -> &str {
        self.re.as_str()
    }

    fn try_extract(&self, text: &str) -> Option<String> {
        self.re
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Ordered strategies evaluated first-match-wins.
#[derive(Clone, Default)]
pub struct StrategyChain {
    strategies: Vec<Arc<dyn TryExtract>>,
}

impl fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

impl StrategyChain {
    /// Build a chain of [`PatternStrategy`] in the given order.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile or lacks a capture group.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ProbeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strategies = patterns
            .into_iter()
            .map(|p| PatternStrategy::new(p.as_ref()).map(|s| Arc::new(s) as Arc<dyn TryExtract>))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { strategies })
    }

    /// The built-in canary chain.
    ///
    /// # Errors
    ///
    /// Only if a built-in pattern fails to compile.
    pub fn default_canary() -> Result<Self, ProbeError> {
        Self::from_patterns(CANARY_PATTERNS)
    }

    /// The built-in correlation id chain.
    ///
    /// # Errors
    ///
    /// Only if a built-in pattern fails to compile.
    pub fn default_correlation() -> Result<Self, ProbeError> {
        Self::from_patterns(CORRELATION_PATTERNS)
    }

    /// Append a strategy at the lowest priority.
    #[must_use]
    pub fn push(mut self, strategy: Arc<dyn TryExtract>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Index and value of the first strategy that matches; later ones are not run.
    pub fn first_match(&self, text: &str) -> Option<(usize, String)> {
        self.strategies
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.try_extract(text).map(|v| (i, v)))
    }

    pub(crate) fn name_at(&self, index: usize) -> &str {
        self.strategies.get(index).map_or("", |s| s.name())
    }
}
