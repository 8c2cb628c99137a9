//! audiodesc CLI library.
//!
//! This crate provides the core functionality for the `audiodesc` binary:
//! loading records from JSON documents or raw bytes, and the inspection
//! commands built on top of them.

pub mod commands;
pub mod input;
