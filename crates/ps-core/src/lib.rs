//! # ps-core
//!
//! Core types, error definitions, and configuration for pstats.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the `Real` alias, the error hierarchy,
//! the `Handle` wrapper used to inject collaborators, and the process-wide
//! `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Shared, optionally-null reference handle (`Handle<T>`).
pub mod handle;

/// Global library settings (alias mode, survival convention, RNG seed).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Probability in `[0, 1]`.
pub type Probability = Real;

/// Alias used for sample counts.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
pub use settings::{AliasMode, ScopedSettings, Settings, SurvivalConvention};
