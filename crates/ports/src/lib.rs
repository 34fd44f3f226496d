//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`source`]: Opening files and standard input as byte streams
//! - [`render`]: Live terminator marks drawn while a stream is consumed
//! - [`report`]: Presenting finished reports and per-source failures
//!
//! These ports allow the domain and use case layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod render;
pub mod report;
pub mod source;
