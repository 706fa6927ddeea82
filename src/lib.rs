//! signup-probe: find out whether an email-style identifier is already registered
//! with an account signup service, by replaying the requests its web signup flow
//! makes.
//!
//! A check is two sequential calls on a fresh session:
//! 1. GET the signup page, keep its cookies, and harvest the canary token and
//!    correlation id from the page text, its cookies, or its script config.
//! 2. POST the identifier to the availability API with those tokens and classify
//!    the answer.
//!
//! ```no_run
//! # async fn run() -> Result<(), signup_probe::ProbeError> {
//! let client = signup_probe::ProbeClient::builder().build()?;
//! match client.check("someone@outlook.com").await {
//!     signup_probe::AvailabilityResult::Available => println!("free"),
//!     signup_probe::AvailabilityResult::Taken { suggestions } => println!("taken, try {suggestions:?}"),
//!     signup_probe::AvailabilityResult::Failed { reason, .. } => eprintln!("failed: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod core;
#[cfg(feature = "server")]
pub mod server;
pub mod tokens;

pub use availability::{Availability, AvailabilityResult, FailureKind, check, classify};
pub use crate::core::{
    PLACEHOLDER_CORRELATION_ID, PageSnapshot, ProbeClient, ProbeClientBuilder, ProbeError,
    SessionCookie, UserAgentRotation,
};
pub use tokens::{StrategyChain, TokenExtractor, TokenSet, TokenSource, TryExtract};
