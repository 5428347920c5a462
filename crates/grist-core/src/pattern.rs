//! Ant-style path patterns.
//!
//! Patterns are matched segment by segment against relative paths:
//! - `**` as a whole segment matches zero or more segments
//! - `*` matches any run of characters inside one segment
//! - `?` matches exactly one character inside one segment
//!
//! Everything else is literal text. Matching is case-sensitive and anchored
//! to the whole path. Both `/` and `\` separate segments, and a pattern ending
//! in a separator is shorthand for `<pattern>**` (so `sub/` means `sub/**`).

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**`: any number of whole segments, including none.
    AnyDepth,
    Literal(String),
    Wildcard(Vec<char>),
}

impl Segment {
    fn parse(text: &str) -> Self {
        if text == "**" {
            Segment::AnyDepth
        } else if text.contains(['*', '?']) {
            Segment::Wildcard(text.chars().collect())
        } else {
            Segment::Literal(text.to_owned())
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Segment::AnyDepth => true,
            Segment::Literal(literal) => literal == name,
            Segment::Wildcard(glob) => {
                let name: Vec<char> = name.chars().collect();
                wildcard_match(glob, &name)
            }
        }
    }
}

/// Single-segment wildcard match with `*` backtracking.
fn wildcard_match(glob: &[char], name: &[char]) -> bool {
    let (mut g, mut n) = (0, 0);
    // Last `*` seen in the glob and the name position it currently absorbs up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match glob.get(g) {
            Some('*') => {
                backtrack = Some((g, n));
                g += 1;
            }
            Some('?') => {
                g += 1;
                n += 1;
            }
            Some(&c) if c == name[n] => {
                g += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    g = star + 1;
                    n = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }

    glob[g..].iter().all(|&c| c == '*')
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::AnyDepth, rest)) => {
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        Some((segment, rest)) => match path.split_first() {
            Some((head, tail)) => segment.matches(head) && match_segments(rest, tail),
            None => false,
        },
    }
}

fn split_path(path: &str) -> (bool, Vec<&str>) {
    let rooted = path.starts_with(['/', '\\']);
    let parts = path.split(['/', '\\']).filter(|p| !p.is_empty()).collect();
    (rooted, parts)
}

/// A compiled Ant-style pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    rooted: bool,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a pattern. Never fails: unrecognized syntax is literal text.
    pub fn new(pattern: &str) -> Self {
        let (rooted, parts) = split_path(pattern);

        let mut segments: Vec<Segment> = Vec::with_capacity(parts.len() + 1);
        for part in parts {
            let segment = Segment::parse(part);
            if segment == Segment::AnyDepth && segments.last() == Some(&Segment::AnyDepth) {
                continue;
            }
            segments.push(segment);
        }

        if pattern.ends_with(['/', '\\']) && segments.last() != Some(&Segment::AnyDepth) {
            segments.push(Segment::AnyDepth);
        }

        Self {
            source: pattern.to_owned(),
            rooted,
            segments,
        }
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `path` (relative, `/` or `\` separated) matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let (rooted, parts) = split_path(path);
        if rooted != self.rooted {
            return false;
        }
        match_segments(&self.segments, &parts)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A set of unique patterns; a path matches the set if any pattern matches.
///
/// Iteration order is the lexical order of the pattern text, so log output
/// and serialized forms are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeSet<String>", into = "BTreeSet<String>")]
pub struct PatternSet {
    patterns: BTreeMap<String, Pattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Add a pattern. Returns `false` if the same text was already present.
    pub fn insert(&mut self, pattern: &str) -> bool {
        if self.patterns.contains_key(pattern) {
            return false;
        }
        self.patterns
            .insert(pattern.to_owned(), Pattern::new(pattern));
        true
    }

    /// A copy of this set with `pattern` added; `self` is left untouched.
    pub fn with(&self, pattern: &str) -> Self {
        let mut extended = self.clone();
        extended.insert(pattern);
        extended
    }

    /// A copy of this set with every pattern of `other` added.
    pub fn union(&self, other: &PatternSet) -> Self {
        let mut merged = self.clone();
        for (text, pattern) in &other.patterns {
            merged
                .patterns
                .entry(text.clone())
                .or_insert_with(|| pattern.clone());
        }
        merged
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains_key(pattern)
    }

    /// Whether any pattern in the set matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.values().any(|p| p.matches(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PatternSet::new();
        for pattern in iter {
            set.insert(pattern.as_ref());
        }
        set
    }
}

impl From<BTreeSet<String>> for PatternSet {
    fn from(patterns: BTreeSet<String>) -> Self {
        patterns.into_iter().collect()
    }
}

impl From<PatternSet> for BTreeSet<String> {
    fn from(set: PatternSet) -> Self {
        set.patterns.into_keys().collect()
    }
}
