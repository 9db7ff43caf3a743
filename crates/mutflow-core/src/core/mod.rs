//! # Core Module
//!
//! This module provides the fundamental data contracts of the mutflow pipeline:
//! the candidate-set file format and the naming scheme that ties every derived
//! artifact back to its source structure.
//!
//! ## Architecture
//!
//! - **File I/O** ([`io`]) - Streaming FASTA handling, including the header
//!   renumbering applied to every generated candidate set
//! - **Artifact Naming** ([`artifacts`]) - The per-stem naming contract and
//!   candidate-set discovery
//!
//! Everything in this layer is stateless and free of subprocess concerns; the
//! [`crate::engine`] layer builds on these contracts to run the actual tools.

pub mod artifacts;
pub mod io;
