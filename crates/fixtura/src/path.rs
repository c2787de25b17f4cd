//! Parsing for dotted association paths with repetition brackets
//!
//! Association paths are a small micro-language: dot-separated association
//! names, each optionally carrying one `[n]` repetition group, as in
//! `Authors[5].Articles[10].Bills`. `AssociationPath` is the parsed form;
//! every bracket and validation rule lives here so call sites never
//! re-parse raw strings.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AssociationBuilderError, BuilderResult};

static BRACKET_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("bracket group pattern compiles"));

/// One segment of an association path: an association name and an optional
/// repetition count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Association name with brackets stripped
    pub name: String,

    /// Repetition count taken from the `[n]` group, if present
    pub count: Option<u32>,
}

impl PathSegment {
    /// Parse a single raw segment such as `Authors[5]`
    pub fn parse(raw: &str) -> BuilderResult<Self> {
        let count = times_between_brackets(raw)?;
        let name = BRACKET_GROUP.replace_all(raw, "").into_owned();
        Ok(Self { name, count })
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            Some(count) => write!(f, "{}[{}]", self.name, count),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered, parsed association path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationPath {
    segments: Vec<PathSegment>,
}

impl AssociationPath {
    /// Parse a raw dotted path, validating each segment's brackets
    pub fn parse(raw: &str) -> BuilderResult<Self> {
        let segments = raw
            .split('.')
            .map(PathSegment::parse)
            .collect::<BuilderResult<Vec<_>>>()?;
        Ok(Self { segments })
    }

    /// The parsed segments, in path order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Repetition count on the final segment, if any
    pub fn final_count(&self) -> Option<u32> {
        self.segments.last().and_then(|segment| segment.count)
    }

    /// Canonical dotted form with every bracket group stripped
    pub fn canonical(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for AssociationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Strip every `[..]` group from every segment of a raw path.
///
/// A pure transform: bracket contents are not validated and the number and
/// order of segments are unchanged.
pub fn remove_brackets(path: &str) -> String {
    BRACKET_GROUP.replace_all(path, "").into_owned()
}

/// Extract the repetition count between brackets on a single segment.
///
/// Returns `None` when the segment carries no brackets. Fails when the
/// brackets are empty, when the count is not a positive integer, or when
/// more than one bracket group appears on the segment.
pub fn times_between_brackets(segment: &str) -> BuilderResult<Option<u32>> {
    let mut groups = BRACKET_GROUP.captures_iter(segment);

    let first = match groups.next() {
        None => return Ok(None),
        Some(captures) => captures,
    };
    if groups.next().is_some() {
        return Err(AssociationBuilderError::MultipleBracketGroups(
            segment.to_string(),
        ));
    }

    let inner = &first[1];
    if inner.is_empty() {
        return Err(AssociationBuilderError::EmptyBrackets(segment.to_string()));
    }

    match inner.parse::<u32>() {
        Ok(count) if count > 0 => Ok(Some(count)),
        _ => Err(AssociationBuilderError::InvalidCount(segment.to_string())),
    }
}
