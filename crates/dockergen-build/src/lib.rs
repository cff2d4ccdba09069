//! Template rendering and artifact output for dockergen.
//!
//! # Generation pass
//!
//! ```text
//! dockergen config.json out/
//!   1. Load        ── config.json → Context
//!   2. Name        ── service_name, or "default_service"
//!   3. Target dir  ── create_dir_all(out/)
//!   4. Render      ── Dockerfile.j2     → out/<service>_Dockerfile
//!                     build.sh.j2       → out/<service>_build.sh       (0755)
//!                     entrypoint.sh.j2  → out/<service>_entrypoint.sh  (0755)
//! ```
//!
//! There is no rollback: a failure while rendering the build script leaves
//! the Dockerfile on disk.
//!
//! # Templates
//!
//! Templates use Jinja syntax via minijinja. They come either from a
//! directory ([`TemplateSource::Directory`]) or from the defaults compiled
//! into the crate ([`TemplateSource::Embedded`]).

pub mod generator;
pub mod output;
pub mod template;

pub use generator::{GenerateError, GeneratedArtifact, Generator};
pub use template::{MinijinjaRenderer, TemplateError, TemplateRenderer, TemplateSource};
