//!
//! The benchmark data model.
//!

pub mod benchmark;
