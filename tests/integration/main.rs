//! HTTP integration tests
//!
//! Every test runs the real router in-process against temporary directories.

#![cfg(feature = "ssr")]

mod common;
