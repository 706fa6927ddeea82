//! Core components of the `signup-probe` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`ProbeClient`] and its builder.
//! - The primary [`ProbeError`] type.
//! - The per-check HTTP session and the bootstrap page fetch.
//! - Body reading with gzip decoding.

/// The main client (`ProbeClient`), builder, session and identity rotation.
pub mod client;
/// The primary error type (`ProbeError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ProbeClient`
pub use client::{
    PLACEHOLDER_CORRELATION_ID, PageSnapshot, ProbeClient, ProbeClientBuilder, SessionCookie,
    UserAgentRotation,
};
pub use error::ProbeError;
