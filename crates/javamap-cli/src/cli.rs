//! CLI argument definitions for `javamap`.
//!
//! There is a single operation: generate a source-code mapping document
//! from a container image's SBOM. The flags let a caller substitute
//! already-built inputs (`--sbom-json`) so the tool can run without Docker
//! or Syft installed.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "javamap",
    version,
    about = "Map runtime Java package prefixes to their source repositories"
)]
pub struct Cli {
    /// Path to the Dockerfile used to build the image under inspection.
    #[arg(long, default_value = "Dockerfile")]
    pub dockerfile: PathBuf,

    /// Name to tag the built image with.
    #[arg(long, default_value = "javamap-target")]
    pub image_name: String,

    /// Build context directory passed to `docker build`.
    #[arg(long, default_value = ".")]
    pub context: PathBuf,

    /// Where to write the generated mapping document.
    #[arg(short, long, default_value = "source_code_mappings.yaml")]
    pub output: PathBuf,

    /// Skip `docker build` and assume `--image-name` already exists locally.
    #[arg(long)]
    pub skip_build: bool,

    /// Skip running Syft and read `--sbom-json` instead.
    #[arg(long)]
    pub skip_sbom: bool,

    /// Path to a pre-generated Syft SBOM JSON document (implies `--skip-sbom`).
    #[arg(long)]
    pub sbom_json: Option<PathBuf>,

    /// Path to an existing mapping document; if present, its entries are
    /// seeded into the builder (and keep priority over freshly-discovered
    /// prefixes) before this run's own archives are processed.
    #[arg(long)]
    pub mappings_file: Option<PathBuf>,

    /// GitHub API token; falls back to the environment variable named by
    /// the config's `github.token-env` (default `GITHUB_TOKEN`).
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Path to an optional `javamap.toml` configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose progress output on stdout.
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
