use serde::Serialize;

use crate::core::ProbeError;

/// Verdict of a check that got a recognized answer from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    /// The identifier is not registered.
    Available,
    /// The identifier is registered; the service may propose alternates.
    Taken { suggestions: Vec<String> },
}

/// Which stage a failed check stopped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network, connect or read failure on either call.
    Transport,
    /// A gzip-declared body did not inflate.
    Decode,
    /// No usable canary token in the bootstrap page.
    TokenMissing,
    /// The API answered with an error object.
    Upstream,
    /// The API answer matched no known shape.
    UnexpectedResponse,
    /// The client itself was misconfigured.
    Config,
}

impl From<&ProbeError> for FailureKind {
    fn from(e: &ProbeError) -> Self {
        match e {
            ProbeError::Http(_) => FailureKind::Transport,
            ProbeError::Decode(_) => FailureKind::Decode,
            ProbeError::TokenMissing { .. } | ProbeError::InvalidToken(_) => {
                FailureKind::TokenMissing
            }
            ProbeError::Upstream(_) => FailureKind::Upstream,
            ProbeError::UnexpectedResponse(_) => FailureKind::UnexpectedResponse,
            ProbeError::Url(_)
            | ProbeError::Pattern(_)
            | ProbeError::Config(_)
            | ProbeError::Json(_) => FailureKind::Config,
        }
    }
}

/// Terminal outcome of one check. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AvailabilityResult {
    /// The identifier is not registered.
    Available,
    /// The identifier is registered, with any alternates the service proposed.
    Taken { suggestions: Vec<String> },
    /// The check stopped early; `reason` is human-readable.
    Failed { kind: FailureKind, reason: String },
}

impl AvailabilityResult {
    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityResult::Available)
    }

    /// The identifier is already registered.
    pub fn exists(&self) -> bool {
        matches!(self, AvailabilityResult::Taken { .. })
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            AvailabilityResult::Taken { suggestions } => suggestions,
            _ => &[],
        }
    }

    /// Failure reason, if the check failed.
    pub fn reason(&self) -> Option<&str> {
        match self {
            AvailabilityResult::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<Availability> for AvailabilityResult {
    fn from(a: Availability) -> Self {
        match a {
            Availability::Available => AvailabilityResult::Available,
            Availability::Taken { suggestions } => AvailabilityResult::Taken { suggestions },
        }
    }
}

impl From<ProbeError> for AvailabilityResult {
    fn from(e: ProbeError) -> Self {
        AvailabilityResult::Failed {
            kind: FailureKind::from(&e),
            reason: e.reason(),
        }
    }
}

impl From<Result<Availability, ProbeError>> for AvailabilityResult {
    fn from(r: Result<Availability, ProbeError>) -> Self {
        match r {
            Ok(a) => a.into(),
            Err(e) => e.into(),
        }
    }
}
