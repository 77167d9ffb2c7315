//! TriChoice: educational reasoning calculator for tricuspid repair (T-TEER)
//! versus replacement (TTVR).
//!
//! The core is two pure functions: [`compute_score`] maps the five GLIDE
//! anatomic flags to a 0-5 total with a likelihood bucket, and [`recommend`]
//! maps that total plus the clinical context to a therapy direction with
//! ordered rationale. [`assess`] composes them. Everything else (case files,
//! report rendering, CLI) wraps that surface.
//!
//! Not a medical device or clinical decision support tool.

pub mod case;
pub mod cli;
pub mod engine;
pub mod error;
pub mod references;
pub mod report;
pub mod types;

pub use engine::{assess, compute_score, recommend};
pub use error::{Result, TriChoiceError};
