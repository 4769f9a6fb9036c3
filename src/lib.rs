//! Project spectral samples through precomputed LDA weights and render each
//! result as text, a URL query string or a QR code.
//!
//! ```text
//!  samples ─┐
//!  scalings ├─ data::loader ─► lda::Pipeline ─► present::Presenter ─► stdout / PNG
//!  xbar ────┘
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod lda;
pub mod present;

pub use config::Config;
pub use error::{LdaError, Result};
