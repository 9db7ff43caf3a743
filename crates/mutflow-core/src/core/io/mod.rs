//! Provides input/output functionality for sequence file formats.
//!
//! The pipeline exchanges data with its external tools exclusively through
//! files, so this module is limited to the one format the orchestration layer
//! must understand itself: multi-record FASTA candidate sets.

pub mod fasta;
