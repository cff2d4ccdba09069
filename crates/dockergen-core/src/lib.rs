//! Core types for dockergen.
//!
//! This crate defines the generation [`Context`] loaded from a JSON config,
//! service-name resolution, the [`ArtifactKind`]s a pass produces, and the
//! shared error types.

pub mod artifact;
pub mod config;
pub mod error;

pub use artifact::ArtifactKind;
pub use config::{Context, DEFAULT_SERVICE_NAME, SERVICE_NAME_KEY};
pub use error::{Error, Result};
