//! Output serialization: rendering a [`MappingDocument`] to its on-disk
//! YAML shape.

use serde::{Deserialize, Serialize};

use javamap_core::mapping::{MappingDocument, MappingEntry};
use javamap_core::prefix::PackagePrefix;
use javamap_core::source::SourceDescriptor;

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputDocument {
    pub source_code: SourceCode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceCode {
    pub mappings: Vec<MappingOutputEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MappingOutputEntry {
    pub function_name: Vec<FunctionName>,
    pub language: String,
    pub source: SourceOutput,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionName {
    pub prefix: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum SourceOutput {
    #[serde(rename = "local")]
    Local { path: String },
    #[serde(rename = "github")]
    Github {
        owner: String,
        repo: String,
        #[serde(rename = "ref")]
        git_ref: String,
        path: String,
    },
}

impl From<&MappingDocument> for OutputDocument {
    fn from(document: &MappingDocument) -> Self {
        let mappings = document
            .entries()
            .iter()
            .map(|entry| MappingOutputEntry {
                function_name: entry
                    .prefixes
                    .iter()
                    .map(|p| FunctionName { prefix: p.as_str().to_string() })
                    .collect(),
                language: "java".to_string(),
                source: match &entry.source {
                    SourceDescriptor::Local { path } => SourceOutput::Local { path: path.clone() },
                    SourceDescriptor::Remote { owner, repo, git_ref, in_repo_path } => SourceOutput::Github {
                        owner: owner.clone(),
                        repo: repo.clone(),
                        git_ref: git_ref.clone(),
                        path: in_repo_path.clone(),
                    },
                },
            })
            .collect();

        OutputDocument {
            source_code: SourceCode { mappings },
        }
    }
}

/// Render a mapping document as a YAML string.
pub fn render_yaml(document: &MappingDocument) -> Result<String, serde_yaml::Error> {
    let output = OutputDocument::from(document);
    serde_yaml::to_string(&output)
}

/// Parse a previously-written mapping document back into [`MappingEntry`]
/// values, for seeding the builder with `--mappings-file`.
pub fn parse_yaml(yaml: &str) -> Result<Vec<MappingEntry>, serde_yaml::Error> {
    let output: OutputDocument = serde_yaml::from_str(yaml)?;
    Ok(output
        .source_code
        .mappings
        .into_iter()
        .map(|entry| MappingEntry {
            prefixes: entry
                .function_name
                .into_iter()
                .map(|f| PackagePrefix::new(f.prefix))
                .collect(),
            source: match entry.source {
                SourceOutput::Local { path } => SourceDescriptor::local(path),
                SourceOutput::Github { owner, repo, git_ref, path } => {
                    SourceDescriptor::remote(owner, repo, git_ref, path)
                }
            },
        })
        .collect())
}
