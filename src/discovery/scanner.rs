//! Layered collection of definition files.
//!
//! Walks the same relative subpath under every root of a load order and
//! concatenates the results in root order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension of LSX definition files.
pub const DEFINITION_EXTENSION: &str = "lsx";

/// Collect definition files under `root/subpath` for every root, in order.
///
/// Roots whose subpath does not exist contribute nothing. Within one root,
/// files are ordered by file name at each directory level.
pub fn collect(roots: &[PathBuf], subpath: impl AsRef<Path>) -> Vec<PathBuf> {
    let subpath = subpath.as_ref();
    roots
        .iter()
        .flat_map(|root| scan_directory(&root.join(subpath)))
        .collect()
}

/// Recursively collect definition files under one directory.
pub fn scan_directory(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_definition_file(p))
        .collect()
}

/// Check whether a path has the definition-file extension (any case).
pub fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DEFINITION_EXTENSION))
}

/// List subdirectory names of `dir`, sorted. Missing directories yield nothing.
pub fn subdirectory_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_definition_file() {
        assert!(is_definition_file(Path::new("RootTemplates/_merged.lsx")));
        assert!(is_definition_file(Path::new("Tags/A.LSX")));
        assert!(!is_definition_file(Path::new("english.xml")));
        assert!(!is_definition_file(Path::new("lsx")));
    }

    #[test]
    fn test_collect_preserves_root_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("Shared");
        let second = dir.path().join("Gustav");

        fs::create_dir_all(first.join("RootTemplates")).unwrap();
        fs::create_dir_all(second.join("RootTemplates/nested")).unwrap();
        fs::write(first.join("RootTemplates/z.lsx"), "").unwrap();
        fs::write(second.join("RootTemplates/a.lsx"), "").unwrap();
        fs::write(second.join("RootTemplates/nested/b.lsx"), "").unwrap();
        fs::write(second.join("RootTemplates/readme.txt"), "").unwrap();

        let files = collect(&[first.clone(), second.clone()], "RootTemplates");

        assert_eq!(
            files,
            vec![
                first.join("RootTemplates/z.lsx"),
                second.join("RootTemplates/a.lsx"),
                second.join("RootTemplates/nested/b.lsx"),
            ]
        );
    }

    #[test]
    fn test_collect_missing_subpath() {
        let dir = tempdir().unwrap();
        let files = collect(&[dir.path().to_path_buf()], "Tags");
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_nonexistent_root() {
        let files = collect(&[PathBuf::from("/nonexistent/root")], "Tags");
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_is_stable() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("Tags")).unwrap();
        for name in ["c.lsx", "a.lsx", "b.lsx"] {
            fs::write(root.join("Tags").join(name), "").unwrap();
        }

        let first = collect(&[root.clone()], "Tags");
        let second = collect(&[root.clone()], "Tags");
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.lsx"));
    }

    #[test]
    fn test_subdirectory_names() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("WLD_Main_A")).unwrap();
        fs::create_dir_all(dir.path().join("SYS_CC_I")).unwrap();
        fs::write(dir.path().join("file.lsx"), "").unwrap();

        assert_eq!(subdirectory_names(dir.path()), vec!["SYS_CC_I", "WLD_Main_A"]);
        assert!(subdirectory_names(&dir.path().join("missing")).is_empty());
    }
}
