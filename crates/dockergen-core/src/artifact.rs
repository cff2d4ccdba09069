use std::fmt;
use std::path::{Path, PathBuf};

/// The three files produced by a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Dockerfile,
    BuildScript,
    EntrypointScript,
}

impl ArtifactKind {
    /// Generation order. Earlier artifacts stay on disk if a later one fails.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Dockerfile,
        ArtifactKind::BuildScript,
        ArtifactKind::EntrypointScript,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            Self::Dockerfile => "Dockerfile.j2",
            Self::BuildScript => "build.sh.j2",
            Self::EntrypointScript => "entrypoint.sh.j2",
        }
    }

    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Dockerfile => "Dockerfile",
            Self::BuildScript => "build.sh",
            Self::EntrypointScript => "entrypoint.sh",
        }
    }

    pub fn is_executable(self) -> bool {
        matches!(self, Self::BuildScript | Self::EntrypointScript)
    }

    /// `<service_name>_<suffix>`
    pub fn file_name(self, service_name: &str) -> String {
        format!("{service_name}_{}", self.file_suffix())
    }

    pub fn output_path(self, target_dir: &Path, service_name: &str) -> PathBuf {
        target_dir.join(self.file_name(service_name))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}
