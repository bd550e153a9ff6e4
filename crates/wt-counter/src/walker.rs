//! Directory traversal for text files.
//!
//! This module provides [`TextWalker`], which uses the `ignore` crate to
//! walk directories while respecting `.gitignore` patterns.
//!
//! # Features
//!
//! - Respects `.gitignore` and `.ignore` patterns
//! - Filters by configured extensions (an empty list accepts every file)
//! - Skips hidden directories and files
//! - Converts paths to UTF-8 [`Utf8PathBuf`](camino::Utf8PathBuf)
//!
//! # Examples
//!
//! ```ignore
//! use wt_core::WalkConfig;
//! use wt_counter::TextWalker;
//! use camino::Utf8Path;
//!
//! let walker = TextWalker::from_config(Utf8Path::new("./docs"), &WalkConfig::default())?;
//!
//! for path in walker.collect_paths()? {
//!     println!("Found: {path}");
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use wt_core::WalkConfig;

use crate::error::CountError;

/// Directories never descended into.
const SKIP_DIRECTORIES: &[&str] = &[".git", "target", "node_modules", ".venv", "__pycache__"];

/// A walker that discovers text files in a directory tree.
///
/// Paths are returned sorted so repeated runs see files in the same order.
#[derive(Debug)]
pub struct TextWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Accepted extensions without the leading dot; empty accepts all.
    extensions: Vec<String>,
    /// Additional directories to skip (beyond the built-in list).
    skip_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl TextWalker {
    /// Creates a walker for the given root directory.
    ///
    /// The walker starts out accepting every file extension.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::NotFound`] if the root doesn't exist and
    /// [`CountError::InvalidArgument`] if it isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, CountError> {
        if !root.exists() {
            return Err(CountError::NotFound(root.to_owned()));
        }
        if !root.is_dir() {
            return Err(CountError::invalid_argument(format!(
                "root path is not a directory: {root}"
            )));
        }

        Ok(Self {
            root: root.to_owned(),
            extensions: Vec::new(),
            skip_dirs: Vec::new(),
            follow_links: false,
        })
    }

    /// Creates a walker configured from a [`WalkConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(root: &Utf8Path, config: &WalkConfig) -> Result<Self, CountError> {
        let mut walker = Self::new(root)?;
        walker.extensions.clone_from(&config.extensions);
        walker.skip_dirs.clone_from(&config.skip_dirs);
        walker.follow_links = config.follow_links;
        Ok(walker)
    }

    /// Collects all matching file paths under the root, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::Walk`] if directory traversal fails and
    /// [`CountError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, CountError> {
        let mut paths = Vec::new();

        for result in self.build_walker() {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| CountError::NonUtf8Path(path.to_owned()))?;

            if !self.has_accepted_extension(utf8_path) || self.should_skip_path(utf8_path) {
                continue;
            }

            paths.push(utf8_path.to_owned());
        }

        paths.sort();
        Ok(paths)
    }

    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            .standard_filters(true)
            .follow_links(self.follow_links)
            .threads(1)
            // Don't require the root to be a git repo
            .require_git(false)
            .build()
    }

    fn has_accepted_extension(&self, path: &Utf8Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn should_skip_path(&self, path: &Utf8Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|component| {
            let name = component.as_str();
            SKIP_DIRECTORIES.contains(&name) || self.skip_dirs.iter().any(|d| d == name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker(extensions: &[&str], skip_dirs: &[&str]) -> TextWalker {
        TextWalker {
            root: Utf8PathBuf::from("."),
            extensions: extensions.iter().map(ToString::to_string).collect(),
            skip_dirs: skip_dirs.iter().map(ToString::to_string).collect(),
            follow_links: false,
        }
    }

    #[test]
    fn test_extension_filter() {
        let walker = walker(&["txt", "md"], &[]);
        assert!(walker.has_accepted_extension(Utf8Path::new("notes.txt")));
        assert!(walker.has_accepted_extension(Utf8Path::new("docs/README.MD")));
        assert!(!walker.has_accepted_extension(Utf8Path::new("main.rs")));
        assert!(!walker.has_accepted_extension(Utf8Path::new("LICENSE")));
    }

    #[test]
    fn test_empty_extension_list_accepts_all() {
        let walker = walker(&[], &[]);
        assert!(walker.has_accepted_extension(Utf8Path::new("LICENSE")));
        assert!(walker.has_accepted_extension(Utf8Path::new("main.rs")));
    }

    #[test]
    fn test_should_skip_path() {
        let walker = walker(&[], &["drafts"]);
        assert!(walker.should_skip_path(Utf8Path::new("target/debug/out.txt")));
        assert!(walker.should_skip_path(Utf8Path::new("a/node_modules/b.txt")));
        assert!(walker.should_skip_path(Utf8Path::new("drafts/idea.txt")));
        assert!(!walker.should_skip_path(Utf8Path::new("docs/guide.txt")));
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let err = TextWalker::new(Utf8Path::new("/no/such/dir/for/wordtally")).unwrap_err();
        assert!(matches!(err, CountError::NotFound(_)));
    }

    #[test]
    fn test_collect_paths_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::create_dir_all(root.join("target")).unwrap();
        std::fs::write(root.join("b.txt"), "b").unwrap();
        std::fs::write(root.join("a.md"), "a").unwrap();
        std::fs::write(root.join("sub/c.txt"), "c").unwrap();
        std::fs::write(root.join("skip.rs"), "fn main() {}").unwrap();
        std::fs::write(root.join("target/out.txt"), "build output").unwrap();

        let config = WalkConfig::default();
        let paths = TextWalker::from_config(root, &config)
            .unwrap()
            .collect_paths()
            .unwrap();

        let names: Vec<&str> = paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().as_str())
            .collect();
        assert_eq!(names, ["a.md", "b.txt", "sub/c.txt"]);
    }
}
