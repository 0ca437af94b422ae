//! The pipeline config model and its validation.
//!
//! Configs are YAML with this shape:
//!
//! ```yaml
//! pipeline:
//!   source:
//!     type: csv
//!     config:
//!       path: data/input.csv
//!   transformation:
//!     - sql: "SELECT * FROM raw_data WHERE amount > 100"
//!   destination:
//!     type: csv
//!     config:
//!       path: out/result.csv
//! ```
//!
//! Parsing is two-phase: a permissive serde model accepts whatever YAML is
//! there, then validation walks it and reports each missing or invalid field
//! by its dotted path. Unsupported `type` values are format errors, not
//! silent no-ops.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use rpt_model::{ConfigError, FileKind, UnsupportedFormatError};

use crate::error::{PipelineError, Result};

/// A validated pipeline config, immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source: Endpoint,
    pub steps: Vec<TransformStep>,
    pub destination: Endpoint,
}

/// A source or destination: file kind plus locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: FileKind,
    pub path: PathBuf,
}

/// One SQL transformation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformStep {
    pub sql: String,
}

// --- permissive raw model -------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawFile {
    pipeline: Option<RawPipeline>,
}

#[derive(Debug, Deserialize)]
struct RawPipeline {
    source: Option<RawEndpoint>,
    transformation: Option<Vec<RawStep>>,
    destination: Option<RawEndpoint>,
}

#[derive(Debug, Deserialize)]
struct RawEndpoint {
    #[serde(rename = "type")]
    kind: Option<String>,
    config: Option<RawEndpointConfig>,
}

#[derive(Debug, Deserialize)]
struct RawEndpointConfig {
    path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    sql: Option<String>,
}

/// Loads and validates a pipeline config file.
pub fn load_pipeline_config(path: &Path) -> Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        PipelineError::Config(ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: error.to_string(),
        })
    })?;
    parse_pipeline_config(&contents).map_err(|error| match error {
        PipelineError::Config(ConfigError::Unreadable { reason, .. }) => {
            PipelineError::Config(ConfigError::Unreadable {
                path: path.display().to_string(),
                reason,
            })
        }
        other => other,
    })
}

/// Parses and validates a pipeline config from YAML text.
pub fn parse_pipeline_config(yaml: &str) -> Result<PipelineConfig> {
    let raw: RawFile = serde_yaml::from_str(yaml).map_err(|error| {
        PipelineError::Config(ConfigError::Unreadable {
            path: "<inline>".to_string(),
            reason: error.to_string(),
        })
    })?;
    validate(raw)
}

fn validate(raw: RawFile) -> Result<PipelineConfig> {
    let pipeline = raw
        .pipeline
        .ok_or_else(|| ConfigError::missing("pipeline"))?;

    let source = validate_endpoint(
        pipeline.source,
        "pipeline.source",
        &FileKind::READABLE,
        "csv, xlsx, json",
    )?;
    let destination = validate_endpoint(
        pipeline.destination,
        "pipeline.destination",
        &FileKind::WRITABLE,
        "csv, xlsx",
    )?;

    let raw_steps = pipeline
        .transformation
        .ok_or_else(|| ConfigError::missing("pipeline.transformation"))?;
    // An empty step list is rejected rather than treated as a pass-through
    // copy; a pipeline that transforms nothing is almost certainly a config
    // mistake.
    if raw_steps.is_empty() {
        return Err(ConfigError::invalid(
            "pipeline.transformation",
            "at least one transformation step is required",
        )
        .into());
    }
    let mut steps = Vec::with_capacity(raw_steps.len());
    for (index, step) in raw_steps.into_iter().enumerate() {
        let path = format!("pipeline.transformation[{index}].sql");
        let sql = step.sql.ok_or_else(|| ConfigError::missing(&path))?;
        if sql.trim().is_empty() {
            return Err(ConfigError::invalid(&path, "sql must not be empty").into());
        }
        steps.push(TransformStep { sql });
    }

    Ok(PipelineConfig {
        source,
        steps,
        destination,
    })
}

fn validate_endpoint(
    raw: Option<RawEndpoint>,
    prefix: &str,
    allowed: &[FileKind],
    expected: &str,
) -> Result<Endpoint> {
    let endpoint = raw.ok_or_else(|| ConfigError::missing(prefix))?;
    let kind_text = endpoint
        .kind
        .ok_or_else(|| ConfigError::missing(format!("{prefix}.type")))?;
    let kind: FileKind = kind_text
        .parse()
        .map_err(|_: UnsupportedFormatError| UnsupportedFormatError::new(&kind_text, expected))?;
    if !allowed.contains(&kind) {
        return Err(UnsupportedFormatError::new(&kind_text, expected).into());
    }
    let path = endpoint
        .config
        .and_then(|config| config.path)
        .ok_or_else(|| ConfigError::missing(format!("{prefix}.config.path")))?;
    Ok(Endpoint { kind, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
pipeline:
  source:
    type: csv
    config:
      path: data/input.csv
  transformation:
    - sql: "SELECT * FROM raw_data WHERE amount > 100"
    - sql: "SELECT merge_key, amount FROM raw_data"
  destination:
    type: csv
    config:
      path: out/result.csv
"#;

    #[test]
    fn parses_a_valid_config() {
        let config = parse_pipeline_config(VALID).unwrap();
        assert_eq!(config.source.kind, FileKind::Csv);
        assert_eq!(config.source.path, PathBuf::from("data/input.csv"));
        assert_eq!(config.steps.len(), 2);
        assert_eq!(config.destination.path, PathBuf::from("out/result.csv"));
    }

    #[test]
    fn missing_source_path_names_the_field() {
        let yaml = r#"
pipeline:
  source:
    type: csv
    config: {}
  transformation:
    - sql: "SELECT * FROM raw_data"
  destination:
    type: csv
    config:
      path: out/result.csv
"#;
        let err = parse_pipeline_config(yaml).unwrap_err();
        assert!(
            err.to_string().contains("pipeline.source.config.path"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn missing_transformation_list_is_rejected() {
        let yaml = r#"
pipeline:
  source:
    type: csv
    config:
      path: in.csv
  destination:
    type: csv
    config:
      path: out.csv
"#;
        let err = parse_pipeline_config(yaml).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::MissingField { path }) if path == "pipeline.transformation"
        ));
    }

    #[test]
    fn empty_transformation_list_is_rejected_not_a_noop() {
        let yaml = r#"
pipeline:
  source:
    type: csv
    config:
      path: in.csv
  transformation: []
  destination:
    type: csv
    config:
      path: out.csv
"#;
        let err = parse_pipeline_config(yaml).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::InvalidField { path, .. }) if path == "pipeline.transformation"
        ));
    }

    #[test]
    fn blank_sql_is_rejected_with_its_index() {
        let yaml = r#"
pipeline:
  source:
    type: csv
    config:
      path: in.csv
  transformation:
    - sql: "SELECT * FROM raw_data"
    - sql: "   "
  destination:
    type: csv
    config:
      path: out.csv
"#;
        let err = parse_pipeline_config(yaml).unwrap_err();
        assert!(err.to_string().contains("pipeline.transformation[1].sql"));
    }

    #[test]
    fn unsupported_source_type_is_a_format_error() {
        let yaml = VALID.replace("type: csv", "type: parquet");
        let err = parse_pipeline_config(&yaml).unwrap_err();
        assert!(matches!(err, PipelineError::Format(_)));
    }

    #[test]
    fn json_destination_is_a_format_error() {
        let yaml = r#"
pipeline:
  source:
    type: csv
    config:
      path: in.csv
  transformation:
    - sql: "SELECT * FROM raw_data"
  destination:
    type: json
    config:
      path: out.json
"#;
        let err = parse_pipeline_config(yaml).unwrap_err();
        assert!(matches!(err, PipelineError::Format(_)));
    }

    #[test]
    fn load_reads_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.yaml");
        std::fs::write(&path, VALID).unwrap();

        let config = load_pipeline_config(&path).unwrap();
        assert_eq!(config.steps.len(), 2);
    }

    #[test]
    fn missing_config_file_is_unreadable() {
        let err = load_pipeline_config(Path::new("no/such/pipeline.yaml")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::Unreadable { .. })
        ));
    }
}
