use std::borrow::Cow;
use std::path::{Path, PathBuf};

use dockergen_core::{ArtifactKind, Context};

use crate::output::{self, OutputError};
use crate::template::{MinijinjaRenderer, TemplateError, TemplateRenderer, TemplateSource};

/// A file written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl GeneratedArtifact {
    pub fn file_name(&self) -> Cow<'_, str> {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.path.to_string_lossy(),
        }
    }
}

/// Renders the Dockerfile, build script, and entrypoint script for one config.
pub struct Generator<R> {
    renderer: R,
}

impl Generator<MinijinjaRenderer> {
    pub fn with_source(source: TemplateSource) -> Self {
        Self::new(MinijinjaRenderer::new(source))
    }
}

impl<R: TemplateRenderer> Generator<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render_template(
        &self,
        template_name: &str,
        context: &Context,
    ) -> Result<String, GenerateError> {
        Ok(self.renderer.render(template_name, context)?)
    }

    /// Render one artifact's template and write it to `output_path`.
    pub fn generate_artifact(
        &self,
        kind: ArtifactKind,
        context: &Context,
        output_path: &Path,
    ) -> Result<GeneratedArtifact, GenerateError> {
        let content = self.render_template(kind.template_name(), context)?;
        output::write_artifact(&content, output_path)?;
        if kind.is_executable() {
            output::mark_executable(output_path)?;
        }

        Ok(GeneratedArtifact {
            kind,
            path: output_path.to_path_buf(),
        })
    }

    /// Run a full generation pass. See [`Generator::generate_all_with`].
    pub fn generate_all(
        &self,
        config_path: &Path,
        target_dir: &Path,
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        self.generate_all_with(config_path, target_dir, |_| {})
    }

    /// Load the config, resolve the service name, and write all artifacts
    /// into `target_dir` in [`ArtifactKind::ALL`] order.
    ///
    /// `on_generated` is called after each artifact is on disk. The pass
    /// stops at the first error; artifacts written before it are left in place.
    pub fn generate_all_with(
        &self,
        config_path: &Path,
        target_dir: &Path,
        mut on_generated: impl FnMut(&GeneratedArtifact),
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        let mut context = Context::load(config_path)?;
        let service_name = context.resolve_service_name();
        context.set_service_name(&service_name);

        tracing::debug!(
            service = %service_name,
            target_dir = %target_dir.display(),
            "starting generation"
        );

        output::ensure_target_dir(target_dir)?;

        let mut generated = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            let path = kind.output_path(target_dir, &service_name);
            let artifact = self.generate_artifact(kind, &context, &path)?;
            tracing::debug!(artifact = %kind, path = %artifact.path.display(), "generated");
            on_generated(&artifact);
            generated.push(artifact);
        }

        Ok(generated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] dockergen_core::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
