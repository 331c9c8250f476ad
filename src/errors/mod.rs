//! Error types and error handling for the front end.
//!
//! This module defines the errors collected while parsing. It includes:
//!
//! - Error structures with source location information
//! - Specific error variants for each kind of syntax failure
//! - Short suggestions used when rendering diagnostics

pub mod errors;
