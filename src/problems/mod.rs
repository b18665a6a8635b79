//! Ready-made problem definitions.
//!
//! - [`strings`]: evolve a string toward a target string

pub mod strings;
