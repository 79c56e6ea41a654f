//! Shared fixtures for the end-to-end tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use coilpack_core::{BaseTemplate, EndCondition, Material, OptimizationRequest, Target};
use thiserror::Error;

/// Errors that can occur when loading a request file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported request file extension: {0}")]
    Extension(String),
}

/// Returns the path of a file under `fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

/// Loads a request from a JSON, TOML or YAML file, chosen by extension.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or parsed.
pub fn load_request(path: &Path) -> Result<OptimizationRequest, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("toml") => Ok(toml::from_str(&text)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_str(&text)?),
        other => Err(LoadError::Extension(other.unwrap_or_default().to_owned())),
    }
}

/// 50 N/mm from a 3 mm music-wire template, default ranges, open envelope.
#[must_use]
pub fn stiffness_request() -> OptimizationRequest {
    let template = BaseTemplate {
        wire_diameter: 3.0,
        free_length: 60.0,
        work_stroke: 5.0,
        end_condition: EndCondition::ClosedGround,
        material: Material::music_wire(),
    };
    let target = Target::Stiffness {
        k_req: 50.0,
        tolerance_pct: 10.0,
    };
    OptimizationRequest::new(template, target)
}
