//! Token harvesting from the bootstrap page.
//!
//! - [`extract`]: ordered strategy chains for the canary token and correlation id.
//! - [`escape`]: `\uXXXX` decoding applied to extracted values.
//! - [`correlation`]: the placeholder/empty guard and random id generation.

pub mod correlation;
pub mod escape;
pub mod extract;
pub(crate) mod scripts;

pub use correlation::{generate_correlation_id, resolve_correlation_id};
pub use escape::{decode_if_escaped, decode_unicode_escapes, has_unicode_escape};
pub use extract::{PatternStrategy, StrategyChain, TokenExtractor, TokenSource, TryExtract};

use reqwest::header::HeaderValue;

use crate::core::{PageSnapshot, ProbeError};

/// Tokens needed to issue the availability call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    /// Anti-automation token sent as the `canary` header.
    pub canary: String,
    /// Where the canary came from.
    pub canary_source: TokenSource,
    /// Live correlation id; never the URL placeholder.
    pub correlation_id: String,
}

impl TokenExtractor {
    /// Run both extraction passes and apply the correlation id policy.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::TokenMissing` when no canary is found by any path, and
    /// `ProbeError::InvalidToken` when the decoded canary cannot travel in a header.
    /// A correlation candidate that cannot is discarded like an empty one.
    pub fn harvest(
        &self,
        snapshot: &PageSnapshot,
        placeholder: &str,
    ) -> Result<TokenSet, ProbeError> {
        let (canary_source, canary) = self
            .extract_canary(snapshot)
            .ok_or(ProbeError::TokenMissing {
                status: snapshot.status,
            })?;
        let canary = decode_if_escaped(canary);
        if !is_header_safe(&canary) {
            return Err(ProbeError::InvalidToken("canary"));
        }

        let candidate = self
            .extract_correlation(snapshot)
            .map(decode_if_escaped)
            .filter(|id| is_header_safe(id));
        let correlation_id = resolve_correlation_id(candidate.as_deref(), placeholder);

        Ok(TokenSet {
            canary,
            canary_source,
            correlation_id,
        })
    }
}

fn is_header_safe(value: &str) -> bool {
    HeaderValue::from_str(value).is_ok()
}
