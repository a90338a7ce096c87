use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{EngineError, Result};

const META_CHARS: &[char] = &['*', '?', '[', ']', '{', '}', '\\'];

/// A compiled glob pattern together with the directory its walk starts from.
///
/// The pattern is split into a literal base (the leading components without
/// wildcards) and the remainder. Only the base is walked, so `src/**/*.rs`
/// never looks outside `src`. Wildcards never cross `/`; `**` spans any
/// number of directories, including none.
///
/// Names starting with `.` are only matched by a component that itself
/// starts with `.`; `**` never descends into them.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
    base: PathBuf,
    implicit_base: bool,
    max_depth: Option<usize>,
    segments: Option<Vec<Segment>>,
}

/// One `/`-separated component of the wildcard part of a pattern.
#[derive(Debug, Clone)]
enum Segment {
    AnyDirs,
    Name { matcher: GlobMatcher, dotted: bool },
}

impl GlobPattern {
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| EngineError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let components: Vec<&str> = pattern.split('/').collect();
        let literal = components.iter().take_while(|c| !has_meta(c)).count();
        let rest = &components[literal..];

        let base = match components[..literal].join("/") {
            joined if !joined.is_empty() => PathBuf::from(joined),
            _ if pattern.starts_with('/') => PathBuf::from("/"),
            _ => PathBuf::new(),
        };
        let implicit_base = base.as_os_str().is_empty() && !rest.is_empty();

        let max_depth = if rest.iter().any(|c| c.contains("**")) {
            None
        } else {
            Some(rest.iter().filter(|c| !c.is_empty()).count())
        };
        let segments = rest
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| segment(c, case_insensitive))
            .collect::<Option<Vec<_>>>();

        Ok(Self {
            original: pattern.to_string(),
            matcher: glob.compile_matcher(),
            base,
            implicit_base,
            max_depth,
            segments,
        })
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }

    /// Directory (or file) the walk starts from.
    pub fn walk_root(&self) -> &Path {
        if self.implicit_base { Path::new(".") } else { &self.base }
    }

    /// Deepest level below the walk root a match can sit at, `None` when `**` is used.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether [`admits`](Self::admits) filters hidden names component by
    /// component. When a component does not compile on its own (a `{a,b/c}`
    /// alternation spanning `/`), the walk falls back to hiding every dot name.
    pub fn checks_components(&self) -> bool {
        self.segments.is_some()
    }

    /// Whether `relative` (a path below the walk root) can be part of a match.
    ///
    /// Each name is matched against the component at its position, with `**`
    /// absorbing any number of names. A name starting with `.` is only taken
    /// by a component starting with `.`, unless `hidden` is set. Directories
    /// are admitted while components remain to match below them; files only
    /// when every component has been consumed.
    pub fn admits(&self, relative: &Path, is_dir: bool, hidden: bool) -> bool {
        let Some(segments) = &self.segments else {
            return true;
        };

        let mut states = vec![0];
        close_over_any_dirs(&mut states, segments);
        for name in relative.iter() {
            let dot = is_dot_name(name);
            let mut next = Vec::new();
            for &i in &states {
                let advanced = match segments.get(i) {
                    Some(Segment::AnyDirs) if !dot || hidden => Some(i),
                    Some(Segment::Name { matcher, dotted })
                        if (!dot || *dotted || hidden) && matcher.is_match(name) =>
                    {
                        Some(i + 1)
                    }
                    _ => None,
                };
                if let Some(state) = advanced
                    && !next.contains(&state)
                {
                    next.push(state);
                }
            }
            close_over_any_dirs(&mut next, segments);
            if next.is_empty() {
                return false;
            }
            states = next;
        }

        if is_dir {
            states.iter().any(|&i| i < segments.len())
        } else {
            states.contains(&segments.len())
        }
    }

    /// Map a path produced by walking [`walk_root`](Self::walk_root) back to
    /// the form the pattern is written in.
    pub fn relative_path<'a>(&self, walked: &'a Path) -> &'a Path {
        if self.implicit_base {
            walked.strip_prefix(".").unwrap_or(walked)
        } else {
            walked
        }
    }
}

fn has_meta(component: &str) -> bool {
    component.contains(META_CHARS)
}

fn segment(component: &str, case_insensitive: bool) -> Option<Segment> {
    if component == "**" {
        return Some(Segment::AnyDirs);
    }
    let glob = GlobBuilder::new(component)
        .literal_separator(true)
        .case_insensitive(case_insensitive)
        .build()
        .ok()?;
    Some(Segment::Name {
        matcher: glob.compile_matcher(),
        dotted: component.starts_with('.'),
    })
}

// `**` also matches zero names, so its successor is reachable without input.
fn close_over_any_dirs(states: &mut Vec<usize>, segments: &[Segment]) {
    let mut k = 0;
    while k < states.len() {
        let i = states[k];
        if matches!(segments.get(i), Some(Segment::AnyDirs)) && !states.contains(&(i + 1)) {
            states.push(i + 1);
        }
        k += 1;
    }
}

fn is_dot_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}
