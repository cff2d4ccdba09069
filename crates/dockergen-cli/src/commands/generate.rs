use std::path::{Path, PathBuf};

use dockergen_build::{Generator, TemplateSource};

pub fn generate(
    config_path: &Path,
    target_dir: &Path,
    template_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source = match template_dir {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("template directory {} does not exist", dir.display());
            }
            TemplateSource::Directory(dir)
        }
        None => TemplateSource::Embedded,
    };
    tracing::debug!(?source, "using templates");

    let generator = Generator::with_source(source);
    generator.generate_all_with(config_path, target_dir, |artifact| {
        println!(
            "{} generated at {}",
            artifact.file_name(),
            artifact.path.display()
        );
    })?;

    Ok(())
}
