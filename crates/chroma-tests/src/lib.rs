//! Integration tests for chroma-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the profile facade, recognition, matrix generation, and the
//! transfer curves.
