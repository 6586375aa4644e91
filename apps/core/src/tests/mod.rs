//! Test Module
//!
//! Cross-module suites for the lyric pipeline.
//!
//! ## Test Categories
//! - `pipeline_tests`: end-to-end interpretation properties (totality, idempotence, determinism)
//! - `ruleset_tests`: rule engine properties over every signal combination
//! - `snapshot_tests`: locked results stored on disk and in the web client's format

pub mod snapshot_tests;
