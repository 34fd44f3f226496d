//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the domain classifier and the ports:
//!
//! - [`actions`]: the ordered list of things to do, built from the command line
//! - [`runner`]: the dispatch loop that executes an action list
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod actions;
pub mod runner;

pub use actions::{Action, ActionPlan};
pub use runner::{AnalyzeSources, RunSummary};
