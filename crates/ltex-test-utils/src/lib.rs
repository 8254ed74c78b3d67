//! Shared test utilities for the ltex-sync workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll a temporary data root and settings file. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`host`]: [`TestHost`] builder for a temporary host setup

pub mod host;

pub use host::TestHost;
