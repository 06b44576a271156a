//! Test utilities for Mapcode development.
//!
//! Provides a small hand-built world (catalog plus record model) that
//! exercises every encoding scheme, and helpers to turn it into a data
//! blob.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{fixture_bytes, fixture_catalog, fixture_model, FIXTURE_CATALOG};
