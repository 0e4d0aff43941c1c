//! Shared test fixtures for GroupForge crates.
//!
//! This crate provides entry fixtures and assertions for testing.
//!
//! - [`fixtures`] - Entry builders and sample rosters
//! - [`assertions`] - Partition-law and group-count checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! groupforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use groupforge_test::{rated_entries, assert_partition};
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_group_count, assert_partition, member_sets};
pub use fixtures::{league_roster, rated_entries, scored_entries};
