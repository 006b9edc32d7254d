//! Shared helpers: input validation and sequence utilities.

pub mod sequence;
pub mod validation;
