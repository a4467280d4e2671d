use std::path::PathBuf;

use build_version::VersionInfo;
use build_version::config::{VersionSources, app_dir};
use build_version::version::metadata::PeMetadataReader;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "build-version")]
#[command(version, about = "Report the version and build of an installed application")]
struct Cli {
    /// Directory holding the version files (defaults to this executable's directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Print every value as `name: value`
    #[arg(long, conflicts_with = "json")]
    all: bool,

    /// Print every value as a JSON object
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dir = cli.dir.or_else(app_dir);
    let info = VersionInfo::resolve(dir.as_deref(), &VersionSources::default(), &PeMetadataReader);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else if cli.all {
        println!("Version: {}", info.version);
        println!("Revision: {}", info.revision);
        println!("Build: {}", info.build);
        println!("VersionOrBuild: {}", info.version_or_build);
    } else {
        println!("{}", info.version_or_build);
    }

    Ok(())
}
