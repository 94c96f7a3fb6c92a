//! Typed-project detection.

use crate::layer::PROJECT_DESCRIPTOR;
use lint_layers_core::TypedLayerOptions;
use std::path::Path;
use tracing::debug;

/// Returns typed-layer options rooted at `dir` when it holds a project
/// descriptor, `None` otherwise.
#[must_use]
pub fn detect_project(dir: &Path) -> Option<TypedLayerOptions> {
    let descriptor = dir.join(PROJECT_DESCRIPTOR);
    if descriptor.is_file() {
        debug!("Found project descriptor: {}", descriptor.display());
        Some(TypedLayerOptions::new(dir))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_tsconfig() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("tsconfig.json"), "{}").unwrap();
        assert_eq!(
            detect_project(tmp.path()),
            Some(TypedLayerOptions::new(tmp.path()))
        );
    }

    #[test]
    fn plain_project_is_not_typed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        assert_eq!(detect_project(tmp.path()), None);
    }

    #[test]
    fn descriptor_must_be_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("tsconfig.json")).unwrap();
        assert_eq!(detect_project(tmp.path()), None);
    }
}
