//! LDA projection of sample rows against precomputed weights.
//!
//! [`ops`] holds the vector arithmetic, [`format`] the decimal rendering and
//! [`pipeline`] ties them together per sample.

pub mod format;
pub mod ops;
pub mod pipeline;

pub use format::{format_float, format_vector, DEFAULT_PRECISION, MAX_PRECISION};
pub use pipeline::{Pipeline, Summary};
