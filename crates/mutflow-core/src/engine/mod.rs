//! # Engine Module
//!
//! This module implements the orchestration machinery of the pipeline: how the
//! external tools are configured, invoked, and accounted for.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Pipeline directories, fixed generation
//!   parameters, threshold mode, and tool-script resolution
//! - **Tool Invocation** ([`invoke`]) - Blocking run-and-check execution of a
//!   single external command
//! - **Tool Commands** ([`tools`]) - Typed construction of the command line for
//!   each external collaborator
//! - **Progress Monitoring** ([`progress`]) - Stage- and item-level progress
//!   events for user feedback
//! - **Error Handling** ([`error`]) - The stage-level error taxonomy that keeps
//!   every failure mode distinguishable at the process boundary
//!
//! Every invocation is synchronous: the engine suspends until the external
//! process terminates and inspects its exit status before proceeding. There is
//! no timeout, retry, or concurrency anywhere in this layer.

pub mod config;
pub mod error;
pub mod invoke;
pub mod progress;
pub mod tools;
