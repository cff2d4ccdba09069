mod commands;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "dockergen",
    about = "Render a Dockerfile, build script, and entrypoint script from a JSON config"
)]
#[command(version)]
struct Cli {
    /// JSON config file (service_name, base_image, copy_files, ...)
    config: PathBuf,
    /// Directory to write the generated files into (created if missing)
    target_dir: PathBuf,
    /// Read templates from this directory instead of the built-in ones
    #[arg(long, env = "DOCKERGEN_TEMPLATE_DIR")]
    template_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::generate(&cli.config, &cli.target_dir, cli.template_dir)?;

    Ok(())
}
