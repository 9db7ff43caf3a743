//! # mutflow Core Library
//!
//! A library for driving an inverse-folding protein-design pipeline: sequence
//! generation from a folder of structures, candidate-set normalization, and
//! per-structure mutation analysis through a fixed chain of external tools.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless data contracts: FASTA
//!   record streaming and header renumbering, and the per-stem artifact naming
//!   scheme that joins a structure file to everything derived from it.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer owns pipeline
//!   configuration, the error taxonomy, blocking external-tool invocation, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties `engine` and `core` together to execute the complete pipeline: one
//!   generation stage followed by a strictly sequential per-structure analysis
//!   pass. It provides a simple and powerful entry point for end-users of the
//!   library.

pub mod core;
pub mod engine;
pub mod workflows;
