//! audiodesc Integration Test Infrastructure
//!
//! This crate holds the cross-crate tests for the descriptor library and the
//! CLI:
//!
//! - **Properties**: proptest suites over arbitrary descriptors
//! - **Records**: binary layout round trips and truncation handling
//! - **Descriptions**: rendered text for representative real-world formats
//! - **CLI**: command runs against files written to a temp directory
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p audiodesc-tests
//!
//! # A single suite
//! cargo test -p audiodesc-tests --test proptest_properties
//! ```

pub mod fixtures;
