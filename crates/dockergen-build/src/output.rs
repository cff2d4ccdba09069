use std::io::Write;
use std::path::{Path, PathBuf};

/// Mode applied to generated scripts.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Create `target_dir` and any missing parents. An existing directory is fine.
pub fn ensure_target_dir(target_dir: &Path) -> Result<(), OutputError> {
    std::fs::create_dir_all(target_dir).map_err(|e| OutputError::CreateDir {
        path: target_dir.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `output_path`, replacing any existing file.
///
/// The file handle is closed when this returns, whether or not the write
/// succeeded.
pub fn write_artifact(content: &str, output_path: &Path) -> Result<(), OutputError> {
    let write_err = |e| OutputError::Write {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut file = std::fs::File::create(output_path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!(path = %output_path.display(), bytes = content.len(), "artifact written");
    Ok(())
}

/// Set owner/group/other execute bits on `output_path`.
///
/// Does not undo the preceding write on failure.
#[cfg(unix)]
pub fn mark_executable(output_path: &Path) -> Result<(), OutputError> {
    use std::os::unix::fs::PermissionsExt;

    let permission_err = |e| OutputError::SetPermissions {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut perms = std::fs::metadata(output_path)
        .map_err(permission_err)?
        .permissions();
    perms.set_mode(EXECUTABLE_MODE);
    std::fs::set_permissions(output_path, perms).map_err(permission_err)?;

    tracing::debug!(
        path = %output_path.display(),
        mode = %format!("{EXECUTABLE_MODE:o}"),
        "marked executable"
    );
    Ok(())
}

/// No permission bits to set off Unix; only checks that the file exists.
#[cfg(not(unix))]
pub fn mark_executable(output_path: &Path) -> Result<(), OutputError> {
    std::fs::metadata(output_path)
        .map(|_| ())
        .map_err(|e| OutputError::SetPermissions {
            path: output_path.to_path_buf(),
            source: e,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to create target directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to set executable permissions on {path}")]
    SetPermissions {
        path: PathBuf,
        source: std::io::Error,
    },
}
