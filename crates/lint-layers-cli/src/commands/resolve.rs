//! Resolve command implementation.
//!
//! For a file, prints the configuration the analysis tool would apply to
//! it. For a directory, prints which layers apply to each source file
//! underneath, honoring `.gitignore`.

use anyhow::{Context, Result};
use lint_layers::build_chain;
use lint_layers_core::Chain;
use std::path::{Component, Path, PathBuf};

use super::output::{self, Membership};
use super::TypedSelection;
use crate::OutputFormat;

/// Extensions the analysis tool lints.
const SOURCE_EXTENSIONS: &[&str] = &["js", "cjs", "mjs", "jsx", "ts", "tsx", "mts", "cts"];

/// Runs the resolve command.
pub fn run(
    path: &Path,
    project: &Path,
    typed: &TypedSelection,
    format: OutputFormat,
    config: Option<&Path>,
) -> Result<()> {
    let registries = super::load_registries(None)?;
    let request = super::load_request(project, config, typed)?;
    let chain = build_chain(&registries, request)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = lexical_normalize(&cwd.join(project));

    if path.is_dir() {
        let entries = membership(&chain, &cwd.join(path), &root)?;
        tracing::info!("Resolved {} file(s)", entries.len());
        output::print_membership(&entries, format)
    } else {
        let rel = relative_to(&root, &cwd.join(path));
        let resolved = chain.resolve_for(&rel);
        output::print_resolved(&rel, &chain, &resolved, format)
    }
}

fn membership(chain: &Chain, dir: &Path, root: &Path) -> Result<Vec<Membership>> {
    let mut builder = ignore::WalkBuilder::new(dir);
    builder.hidden(false).git_ignore(true).require_git(false);

    let mut entries = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_source(path) {
            continue;
        }

        let rel = relative_to(root, path);
        let resolved = chain.resolve_for(&rel);
        entries.push(Membership {
            layers: output::layer_labels(chain, &resolved.layers),
            file: rel,
        });
    }

    entries.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(entries)
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Path relative to the absolute project `root`, as file patterns expect
/// it. Both sides are compared after lexical normalization; a path outside
/// the project is returned normalized but unstripped.
fn relative_to(root: &Path, path: &Path) -> PathBuf {
    let path = lexical_normalize(path);
    match path.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path,
    }
}

/// Drops `.` components and folds `..` into its parent without touching
/// the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_layers::{
        builtin_registries, ChainRequest, Customization, FilePattern, TypedLayerOptions,
    };
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn relative_paths_drop_project_prefix() {
        let cwd = Path::new("/work/app");
        let root = lexical_normalize(&cwd.join("."));
        assert_eq!(root, PathBuf::from("/work/app"));
        assert_eq!(
            relative_to(&root, &cwd.join("./src/main.ts")),
            PathBuf::from("src/main.ts")
        );
        assert_eq!(
            relative_to(&root, &cwd.join("src/main.ts")),
            PathBuf::from("src/main.ts")
        );
        assert_eq!(
            relative_to(&root, &cwd.join("/work/app/lib/../lib/a.js")),
            PathBuf::from("lib/a.js")
        );
        assert_eq!(
            relative_to(&root, Path::new("/elsewhere/a.js")),
            PathBuf::from("/elsewhere/a.js")
        );
    }

    #[test]
    fn absolute_file_under_relative_project_keeps_scoped_layers() {
        let registries = builtin_registries().unwrap();
        let customize = Customization::hook(|base| {
            base.with_files(vec![FilePattern::new("src/**/*.js").unwrap()])
        });
        let chain =
            build_chain(&registries, ChainRequest::new().with_customize(customize)).unwrap();

        let cwd = Path::new("/work/app");
        let root = lexical_normalize(&cwd.join("."));
        let from_absolute = relative_to(&root, &cwd.join("/work/app/src/a.js"));
        let from_relative = relative_to(&root, &cwd.join("src/a.js"));

        assert_eq!(from_absolute, from_relative);
        assert_eq!(chain.resolve_for(&from_absolute).layers, vec![0, 1, 2]);
    }

    #[test]
    fn relative_file_under_absolute_project() {
        let cwd = Path::new("/work");
        let root = lexical_normalize(&cwd.join("/work/app"));
        assert_eq!(
            relative_to(&root, &cwd.join("app/src/a.js")),
            PathBuf::from("src/a.js")
        );
    }

    #[test]
    fn only_source_files_are_resolved() {
        assert!(is_source(Path::new("a.mts")));
        assert!(is_source(Path::new("b.cjs")));
        assert!(!is_source(Path::new("README.md")));
        assert!(!is_source(Path::new("Makefile")));
    }

    #[test]
    fn directory_membership_respects_gitignore() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join(".gitignore"), "dist/\n").unwrap();
        fs::write(root.join("src/main.ts"), "").unwrap();
        fs::write(root.join("src/util.js"), "").unwrap();
        fs::write(root.join("src/notes.md"), "").unwrap();
        fs::write(root.join("dist/main.js"), "").unwrap();

        let registries = builtin_registries().unwrap();
        let chain = build_chain(
            &registries,
            ChainRequest::new().with_typescript(TypedLayerOptions::new(root)),
        )
        .unwrap();

        let entries = membership(&chain, root, root).unwrap();
        let files: Vec<&Path> = entries.iter().map(|e| e.file.as_path()).collect();
        assert_eq!(files, vec![Path::new("src/main.ts"), Path::new("src/util.js")]);
        assert_eq!(entries[0].layers.len(), 4);
        assert_eq!(entries[1].layers.len(), 3);
    }
}
