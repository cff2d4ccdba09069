use std::path::PathBuf;

use dockergen_core::Context;
use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, path_loader};

static DEFAULT_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Where template sources are looked up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Default templates compiled into the binary.
    Embedded,
    /// A directory on disk containing `Dockerfile.j2`, `build.sh.j2`, `entrypoint.sh.j2`.
    Directory(PathBuf),
}

impl TemplateSource {
    fn location(&self) -> String {
        match self {
            Self::Embedded => "built-in templates".to_owned(),
            Self::Directory(dir) => dir.display().to_string(),
        }
    }
}

fn load_embedded(name: &str) -> Result<Option<String>, minijinja::Error> {
    Ok(DEFAULT_TEMPLATES
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .map(str::to_owned))
}

/// Renders a named template against a generation context.
///
/// Production code uses [`MinijinjaRenderer`], tests use mockall-generated mocks.
pub trait TemplateRenderer {
    fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError>;
}

/// Jinja renderer over a [`TemplateSource`].
///
/// Undefined variables are errors, so a template that references a key the
/// config does not provide fails instead of rendering an empty string.
pub struct MinijinjaRenderer {
    source: TemplateSource,
    env: Environment<'static>,
}

impl MinijinjaRenderer {
    pub fn new(source: TemplateSource) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        match &source {
            TemplateSource::Embedded => env.set_loader(load_embedded),
            TemplateSource::Directory(dir) => env.set_loader(path_loader(dir)),
        }
        Self { source, env }
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        tracing::debug!(template = template_name, source = ?self.source, "rendering template");

        let template = self
            .env
            .get_template(template_name)
            .map_err(|e| self.template_error(template_name, e))?;
        template
            .render(context.values())
            .map_err(|e| self.template_error(template_name, e))
    }
}

impl MinijinjaRenderer {
    fn template_error(&self, name: &str, err: minijinja::Error) -> TemplateError {
        match err.kind() {
            ErrorKind::TemplateNotFound => TemplateError::NotFound {
                name: name.to_owned(),
                location: self.source.location(),
            },
            _ => TemplateError::Render {
                name: name.to_owned(),
                source: err,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template {name} not found in {location}")]
    NotFound { name: String, location: String },
    #[error("failed to render template {name}")]
    Render {
        name: String,
        source: minijinja::Error,
    },
}
