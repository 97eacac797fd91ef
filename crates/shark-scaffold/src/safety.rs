//! Target-directory safety checks
//!
//! A directory is safe to scaffold into when it only contains entries a
//! fresh repository host or IDE would have generated. Error logs left by
//! a previous failed install are not conflicts; they are deleted before
//! the template is cloned.

use camino::Utf8Path;
use tracing::debug;

use crate::error::Result;

/// Entries allowed to pre-exist in an otherwise empty target directory
const VALID_FILES: [&str; 16] = [
    ".DS_Store",
    "Thumbs.db",
    ".git",
    ".gitignore",
    ".idea",
    "README.md",
    "LICENSE",
    ".hg",
    ".hgignore",
    ".hgcheck",
    ".npmignore",
    "mkdocs.yml",
    "docs",
    ".travis.yml",
    ".gitlab-ci.yml",
    ".gitattributes",
];

/// Prefixes of log files a previous failed install may have left behind
const ERROR_LOG_PREFIXES: [&str; 3] = ["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

fn is_error_log(name: &str) -> bool {
    ERROR_LOG_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// List entries that make the directory unsafe to scaffold into.
/// IntelliJ module files (`*.iml`) and stale error logs are tolerated.
/// An empty result means the directory is safe.
pub fn conflicting_entries(root: &Utf8Path) -> Result<Vec<String>> {
    let mut conflicts = Vec::new();

    for entry in root.read_dir_utf8()? {
        let entry = entry?;
        let name = entry.file_name();
        if VALID_FILES.contains(&name) || name.ends_with(".iml") || is_error_log(name) {
            continue;
        }
        conflicts.push(name.to_string());
    }

    conflicts.sort_unstable();
    Ok(conflicts)
}

/// Delete error logs left over from a previous failed install.
/// Returns the names of the removed files.
pub fn remove_stale_logs(root: &Utf8Path) -> Result<Vec<String>> {
    let mut removed = Vec::new();

    for entry in root.read_dir_utf8()? {
        let entry = entry?;
        let name = entry.file_name().to_string();
        if is_error_log(&name) && entry.file_type()?.is_file() {
            debug!("Removing stale log file: {}", name);
            std::fs::remove_file(entry.path())?;
            removed.push(name);
        }
    }

    removed.sort_unstable();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_empty_directory_is_safe() {
        let temp = TempDir::new().unwrap();
        assert!(conflicting_entries(&utf8_root(&temp)).unwrap().is_empty());
    }

    #[test]
    fn test_allow_listed_entries_are_safe() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::write(root.join(".gitignore"), "node_modules\n").unwrap();
        std::fs::write(root.join("README.md"), "# hi\n").unwrap();
        std::fs::write(root.join("project.iml"), "").unwrap();
        std::fs::create_dir(root.join("docs")).unwrap();
        assert!(conflicting_entries(&root).unwrap().is_empty());
    }

    #[test]
    fn test_conflicts_are_listed_exactly() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::create_dir(root.join("node_modules")).unwrap();
        std::fs::write(root.join("index.js"), "").unwrap();
        std::fs::write(root.join("README.md"), "").unwrap();
        let conflicts = conflicting_entries(&root).unwrap();
        assert_eq!(conflicts, vec!["index.js".to_string(), "node_modules".to_string()]);
    }

    #[test]
    fn test_stale_logs_are_not_conflicts() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::write(root.join("npm-debug.log"), "").unwrap();
        std::fs::write(root.join("yarn-error.log.2020"), "").unwrap();
        std::fs::write(root.join("yarn-debug.log-old"), "").unwrap();
        assert!(conflicting_entries(&root).unwrap().is_empty());
    }

    #[test]
    fn test_stale_logs_are_removed() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::write(root.join("npm-debug.log"), "").unwrap();
        std::fs::write(root.join("yarn-error.log.2020"), "").unwrap();
        std::fs::write(root.join("README.md"), "").unwrap();

        let removed = remove_stale_logs(&root).unwrap();
        assert_eq!(
            removed,
            vec!["npm-debug.log".to_string(), "yarn-error.log.2020".to_string()]
        );
        assert!(!root.join("npm-debug.log").exists());
        assert!(root.join("README.md").exists());
    }
}
