use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{CommandFactory, Parser};
use readme_motion::config::SAMPLE_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "readme-motion",
    version,
    about = "Generate animated SVG widgets for README files"
)]
struct Cli {
    /// Scaffold a sample motion.config.json in the current directory.
    #[arg(long)]
    init: bool,

    /// Render the SVGs defined in the given config.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme table to use instead of themes.json beside the config.
    #[arg(long, value_name = "FILE")]
    themes: Option<PathBuf>,

    /// Output directory, overriding the config's outDir.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Log debug details (theme fallbacks, theme file lookup).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.init {
        let target = std::env::current_dir()
            .context("resolve current directory")?
            .join(SAMPLE_CONFIG_FILE);
        readme_motion::write_sample_config(&target)?;
        return Ok(());
    }

    let Some(config_path) = cli.config.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };
    render(config_path, cli.themes.as_deref(), cli.out_dir)
}

fn render(config_path: &Path, themes: Option<&Path>, out_dir: Option<PathBuf>) -> anyhow::Result<()> {
    if !config_path.is_file() {
        anyhow::bail!("config not found: {}", config_path.display());
    }

    let mut config = readme_motion::load_config(config_path)
        .with_context(|| format!("load config '{}'", config_path.display()))?;
    if let Some(out_dir) = out_dir {
        config.out_dir = out_dir;
    }
    let themes = readme_motion::load_themes(themes, config_path).context("load theme table")?;

    let cwd = std::env::current_dir().context("resolve current directory")?;
    let summary = readme_motion::render_config(&config, &themes, &cwd)?;
    tracing::info!(
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        "render complete"
    );
    Ok(())
}
