//! Classification of the availability API's raw response text.

use std::sync::LazyLock;

use regex::Regex;

use super::model::Availability;
use crate::core::ProbeError;
use crate::tokens::{PatternStrategy, TryExtract};

pub const AVAILABLE_MARKER: &str = r#""isAvailable":true"#;
pub const TAKEN_MARKER: &str = r#""isAvailable":false"#;
pub const ERROR_MARKER: &str = r#""error""#;

static SUGGESTIONS: LazyLock<PatternStrategy> = LazyLock::new(|| {
    PatternStrategy::new(r#""suggestions"\s*:\s*\[([^\]]*)\]"#)
        .expect("suggestions pattern should compile")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted string pattern should compile"));

static ERROR_CODE: LazyLock<PatternStrategy> = LazyLock::new(|| {
    PatternStrategy::new(r#""code"\s*:\s*"?([^",}\s]+)"#).expect("error code pattern should compile")
});

/// Classify the API body, markers checked in priority order.
///
/// # Errors
///
/// `ProbeError::Upstream` with the error code (or the raw body when no code is
/// present) for an error object; `ProbeError::UnexpectedResponse` otherwise.
pub fn classify(body: &str) -> Result<Availability, ProbeError> {
    if body.contains(AVAILABLE_MARKER) {
        return Ok(Availability::Available);
    }

    if body.contains(TAKEN_MARKER) {
        return Ok(Availability::Taken {
            suggestions: extract_suggestions(body),
        });
    }

    if body.contains(ERROR_MARKER) {
        let reason = ERROR_CODE
            .try_extract(body)
            .unwrap_or_else(|| body.to_string());
        return Err(ProbeError::Upstream(reason));
    }

    Err(ProbeError::UnexpectedResponse(
        "unexpected response shape".into(),
    ))
}

/// Quoted entries of the `suggestions` array in source order; empty when absent.
pub fn extract_suggestions(body: &str) -> Vec<String> {
    SUGGESTIONS
        .try_extract(body)
        .map(|inner| {
            QUOTED
                .captures_iter(&inner)
                .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
                .collect()
        })
        .unwrap_or_default()
}
