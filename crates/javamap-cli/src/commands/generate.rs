//! The `javamap` driver: SBOM -> classify -> extract prefixes -> locate
//! and resolve remote sources -> assemble and emit the mapping document.

use miette::{IntoDiagnostic, Result};

use javamap_core::archive::Archive;
use javamap_core::coordinate::MavenCoordinate;
use javamap_core::source::SourceDescriptor;
use javamap_github::{locate_repository, resolve_path, resolve_ref, GithubClient};
use javamap_resolver::{classify, extract_application_prefix, extract_library_prefixes, find_main_archive, Classification, MappingBuilder};
use javamap_sbom::SbomView;
use javamap_util::errors::JavamapError;

use crate::cli::Cli;
use crate::{config_loader, docker, output, syft};

pub async fn exec(cli: Cli) -> Result<()> {
    let config = config_loader::load(cli.config.as_deref()).into_diagnostic()?;

    let sbom_json = obtain_sbom_json(&cli)?;
    let sbom = SbomView::parse(&sbom_json).map_err(miette::Report::new)?;
    let archives = sbom.archives();

    let main = find_main_archive(archives);
    let github_token = cli
        .github_token
        .clone()
        .or_else(|| std::env::var(&config.github.token_env).ok());
    let client = GithubClient::new(config.github.api_base_url.as_str(), github_token).into_diagnostic()?;

    let mut builder = MappingBuilder::new();

    if let Some(mappings_file) = &cli.mappings_file {
        if mappings_file.exists() {
            let existing = javamap_util::fs::read_to_string(mappings_file).into_diagnostic()?;
            let entries = output::parse_yaml(&existing).map_err(|e| JavamapError::Config {
                message: format!("failed to parse existing mappings file: {e}"),
            })?;
            builder.seed(entries);
        }
    }

    for archive in archives {
        let classification = classify(archive, main.as_ref(), &config.classifier);
        match classification {
            Classification::Application => {
                if let Some(prefix) = extract_application_prefix(archive, &config.classifier) {
                    builder.add_application(vec![prefix], SourceDescriptor::local(config.resolver.default_local_path.as_str()));
                }
            }
            Classification::Library => {
                process_library_archive(&client, archive, &config, &mut builder).await;
            }
        }
    }

    let document = builder.build();
    let yaml = output::render_yaml(&document).into_diagnostic()?;
    javamap_util::fs::write_string(&cli.output, &yaml).into_diagnostic()?;

    if cli.verbose {
        println!("wrote {} mapping entries to {}", document.len(), cli.output.display());
    }

    Ok(())
}

async fn process_library_archive(
    client: &GithubClient,
    archive: &Archive,
    config: &javamap_core::config::JavamapConfig,
    builder: &mut MappingBuilder,
) {
    let coordinate = archive.purl.as_deref().and_then(|purl| MavenCoordinate::parse_purl(purl).ok());

    let prefixes = extract_library_prefixes(archive, coordinate.as_ref());
    if prefixes.is_empty() {
        return;
    }

    let Some(coordinate) = coordinate else {
        tracing::debug!(archive = %archive.id, "no Maven coordinate, skipping repository location");
        return;
    };

    let Some(location) = locate_repository(client, archive, &coordinate).await else {
        tracing::warn!(artifact = %coordinate.artifact_id, "no repository found, skipping dependency entry");
        return;
    };

    let git_ref = resolve_ref(
        client,
        &location.owner,
        &location.repo,
        &coordinate.version,
        &coordinate.group_id,
        &config.resolver.jdk_ref,
    )
    .await;

    let in_repo_path = resolve_path(client, &location.owner, &location.repo, &git_ref, &coordinate.artifact_id).await;

    builder.add_dependency(
        prefixes,
        SourceDescriptor::remote(location.owner, location.repo, git_ref, in_repo_path),
    );
}

fn obtain_sbom_json(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.sbom_json {
        return javamap_util::fs::read_to_string(path).into_diagnostic();
    }

    if !cli.skip_build {
        docker::build_image(&cli.dockerfile, &cli.image_name, &cli.context).into_diagnostic()?;
    }

    if cli.skip_sbom {
        return Err(JavamapError::Generic {
            message: "--skip-sbom requires --sbom-json".to_string(),
        }
        .into());
    }

    syft::generate_sbom(&cli.image_name).into_diagnostic()
}
