use std::path::PathBuf;

use ignore::{DirEntry, Walk, WalkBuilder};

use crate::config::WalkOptions;
use crate::error::Result;
use crate::pattern::GlobPattern;

/// Sequential walk yielding every regular file matched by a [`GlobPattern`].
///
/// Entries are visited in file-name order within each directory, so two runs
/// over the same tree enumerate the same paths in the same order. Walk errors
/// (unreadable directories, vanished entries) are yielded in place and do not
/// stop the iteration.
pub struct Matches<'a> {
    pattern: &'a GlobPattern,
    walk: Option<Walk>,
}

impl Iterator for Matches<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        let walk = self.walk.as_mut()?;
        loop {
            match walk.next()? {
                Ok(entry) => {
                    if !is_regular_file(&entry) {
                        continue;
                    }
                    let path = self.pattern.relative_path(entry.path());
                    if self.pattern.matches_path(path) {
                        return Some(Ok(path.to_path_buf()));
                    }
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Expand `pattern` against the file system.
///
/// A walk root that does not exist simply matches nothing.
pub fn matching_files<'a>(pattern: &'a GlobPattern, options: &WalkOptions) -> Matches<'a> {
    let root = pattern.walk_root();
    if std::fs::symlink_metadata(root).is_err() {
        tracing::debug!(root = %root.display(), "walk root does not exist");
        return Matches { pattern, walk: None };
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.hidden && !pattern.checks_components())
        .follow_links(options.follow_links)
        .max_depth(pattern.max_depth())
        .sort_by_file_name(|a, b| a.cmp(b));

    if pattern.checks_components() {
        let filter = pattern.clone();
        let root = root.to_path_buf();
        let hidden = options.hidden;
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let Ok(relative) = entry.path().strip_prefix(&root) else {
                return true;
            };
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            filter.admits(relative, is_dir, hidden)
        });
    }

    Matches {
        pattern,
        walk: Some(builder.build()),
    }
}

// Symlinks are reported when they resolve to a regular file, whether or not
// the walk follows links into directories.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/nested/deep")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("top.rs"), "fn top() {}\n").unwrap();
        fs::write(root.join("src/b.rs"), "").unwrap();
        fs::write(root.join("src/a.rs"), "").unwrap();
        fs::write(root.join("src/notes.txt"), "").unwrap();
        fs::write(root.join("src/nested/c.rs"), "").unwrap();
        fs::write(root.join("src/nested/deep/d.rs"), "").unwrap();
        fs::write(root.join("src/.secret.rs"), "").unwrap();
        fs::write(root.join(".hidden/e.rs"), "").unwrap();
        dir
    }

    fn collect(pattern: &str, options: &WalkOptions) -> Vec<PathBuf> {
        let pattern = GlobPattern::new(pattern, options.case_insensitive).unwrap();
        matching_files(&pattern, options).map(Result::unwrap).collect()
    }

    fn rel(dir: &TempDir, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn pattern_in(dir: &TempDir, glob: &str) -> String {
        format!("{}/{glob}", dir.path().display())
    }

    #[test]
    fn single_level_wildcard() {
        let dir = tree();
        let found = collect(&pattern_in(&dir, "src/*.rs"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn recursive_wildcard_includes_base_level() {
        let dir = tree();
        let found = collect(&pattern_in(&dir, "src/**/*.rs"), &WalkOptions::default());
        assert_eq!(
            rel(&dir, found),
            vec!["src/a.rs", "src/b.rs", "src/nested/c.rs", "src/nested/deep/d.rs"]
        );
    }

    #[test]
    fn hidden_entries_need_opt_in() {
        let dir = tree();
        let visible = collect(&pattern_in(&dir, "**/*.rs"), &WalkOptions::default());
        assert!(!rel(&dir, visible).iter().any(|p| p.contains(".hidden") || p.contains(".secret")));

        let options = WalkOptions { hidden: true, ..WalkOptions::default() };
        let all = rel(&dir, collect(&pattern_in(&dir, "**/*.rs"), &options));
        assert!(all.contains(&".hidden/e.rs".to_string()));
        assert!(all.contains(&"src/.secret.rs".to_string()));
    }

    #[test]
    fn dot_pattern_matches_hidden_file() {
        let dir = tree();
        let found = collect(&pattern_in(&dir, "src/.*.rs"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["src/.secret.rs"]);
    }

    #[test]
    fn wildcard_directory_skips_dot_directories() {
        let dir = tree();
        fs::create_dir_all(dir.path().join("env/.git")).unwrap();
        fs::create_dir_all(dir.path().join("env/app")).unwrap();
        fs::write(dir.path().join("env/.git/.env"), "").unwrap();
        fs::write(dir.path().join("env/app/.env"), "").unwrap();

        let found = collect(&pattern_in(&dir, "env/*/.env"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["env/app/.env"]);

        let options = WalkOptions { hidden: true, ..WalkOptions::default() };
        let all = collect(&pattern_in(&dir, "env/*/.env"), &options);
        assert_eq!(rel(&dir, all), vec!["env/.git/.env", "env/app/.env"]);
    }

    #[test]
    fn recursive_dot_file_pattern_stays_out_of_dot_directories() {
        let dir = tree();
        fs::create_dir_all(dir.path().join("web/.git")).unwrap();
        fs::create_dir_all(dir.path().join("web/ui")).unwrap();
        fs::write(dir.path().join("web/.eslintrc"), "").unwrap();
        fs::write(dir.path().join("web/ui/.eslintrc"), "").unwrap();
        fs::write(dir.path().join("web/.git/.eslintrc"), "").unwrap();

        let found = collect(&pattern_in(&dir, "web/**/.eslintrc"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["web/.eslintrc", "web/ui/.eslintrc"]);
    }

    #[test]
    fn directories_are_not_matches() {
        let dir = tree();
        let found = collect(&pattern_in(&dir, "src/*"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["src/a.rs", "src/b.rs", "src/notes.txt"]);
    }

    #[test]
    fn literal_file_pattern() {
        let dir = tree();
        let found = collect(&pattern_in(&dir, "src/notes.txt"), &WalkOptions::default());
        assert_eq!(rel(&dir, found), vec!["src/notes.txt"]);
    }

    #[test]
    fn missing_root_matches_nothing() {
        let dir = tree();
        assert!(collect(&pattern_in(&dir, "missing/**/*.rs"), &WalkOptions::default()).is_empty());
        assert!(collect(&pattern_in(&dir, "src/missing.rs"), &WalkOptions::default()).is_empty());
    }

    #[test]
    fn no_match_for_other_extension() {
        let dir = tree();
        assert!(collect(&pattern_in(&dir, "**/*.py"), &WalkOptions::default()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_reported() {
        let dir = tree();
        std::os::unix::fs::symlink(dir.path().join("top.rs"), dir.path().join("src/link.rs")).unwrap();
        let found = rel(&dir, collect(&pattern_in(&dir, "src/*.rs"), &WalkOptions::default()));
        assert!(found.contains(&"src/link.rs".to_string()));
    }

    #[test]
    fn relative_path_has_no_dot_prefix() {
        let pattern = GlobPattern::new("*.rs", false).unwrap();
        assert_eq!(pattern.relative_path(Path::new("./x.rs")), Path::new("x.rs"));
    }
}
