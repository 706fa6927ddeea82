//! The availability check: bootstrap → tokens → API call → verdict.

mod api;
mod classify;
mod model;
mod wire;

pub use classify::{AVAILABLE_MARKER, ERROR_MARKER, TAKEN_MARKER, classify, extract_suggestions};
pub use model::{Availability, AvailabilityResult, FailureKind};

use crate::core::client::Session;
use crate::{ProbeClient, ProbeError};

/* ---------------- Public API ---------------- */

/// Checks one identifier, rendering any failure as [`AvailabilityResult::Failed`].
pub async fn check(client: &ProbeClient, identifier: &str) -> AvailabilityResult {
    client.check(identifier).await
}

impl ProbeClient {
    /// Run one check and return its terminal result.
    pub async fn check(&self, identifier: &str) -> AvailabilityResult {
        self.try_check(identifier).await.into()
    }

    /// Run one check, surfacing failures as errors.
    ///
    /// The check opens a fresh session (own cookie store and identity), fetches the
    /// bootstrap page, harvests the tokens and issues exactly one API call. Without a
    /// canary token the API call is never made.
    ///
    /// # Errors
    ///
    /// Any transport, gzip, token, upstream or unexpected-shape failure; none are retried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn try_check(&self, identifier: &str) -> Result<Availability, ProbeError> {
        let session = Session::open(self)?;
        let snapshot = session.bootstrap(self.bootstrap_url()).await?;

        let tokens = self.extractor().harvest(&snapshot, self.placeholder())?;

        let body = api::post_check(self, &session, &snapshot, &tokens, identifier).await?;

        if self.debug() {
            eprintln!(
                "SIGNUP_PROBE_DEBUG [try_check]: api body.len()={} preview=`{}`",
                body.len(),
                body.chars().take(160).collect::<String>()
            );
        }

        classify(&body)
    }
}
