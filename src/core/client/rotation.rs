//! Round-robin identity selection shared by every check a client runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::ProbeError;

/// Owns the user-agent table and the rotation counter.
///
/// Safe to share between concurrent checks: each `next()` is a single atomic
/// increment, and the index wraps modulo the table length.
#[derive(Debug)]
pub struct UserAgentRotation {
    agents: Vec<String>,
    counter: AtomicUsize,
}

impl UserAgentRotation {
    /// Build a rotation over `agents`. The table must not be empty.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Config` if `agents` is empty.
    pub fn new<I, S>(agents: I) -> Result<Self, ProbeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let agents: Vec<String> = agents.into_iter().map(Into::into).collect();
        if agents.is_empty() {
            return Err(ProbeError::Config("user-agent table is empty".into()));
        }
        Ok(Self {
            agents,
            counter: AtomicUsize::new(0),
        })
    }

    /// Pick the next identity. The first pick is index 1, then 2, ..., wrapping.
    pub fn next(&self) -> &str {
        let n = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        &self.agents[n % self.agents.len()]
    }
}
