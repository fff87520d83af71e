//! Shared fixtures for the end-to-end lab scenarios.

pub mod lab;
