//! Tag extraction from doc blocks.
//!
//! A tag line is `// <Label>: <value>`. Matching is an exact literal prefix
//! match on the marker, a single space, the label token and the colon; the
//! value is everything after the colon, untrimmed.

use crate::model::DocBlock;

/// Comment marker every tag line starts with.
const MARKER: &str = "// ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Package,
    Description,
    GitRepository,
    License,
    Title,
    Function,
    CalledWith,
    Example,
    ExpectedOutput,
}

/// Labels recognized in the package doc block, in match order.
pub const PACKAGE_LABELS: &[Label] = &[
    Label::Package,
    Label::Description,
    Label::GitRepository,
    Label::License,
];

/// Labels recognized in function doc blocks, in match order.
pub const FUNCTION_LABELS: &[Label] = &[
    Label::Title,
    Label::Description,
    Label::Function,
    Label::CalledWith,
    Label::Example,
    Label::ExpectedOutput,
];

impl Label {
    /// Token as written in source, before the colon.
    pub fn token(self) -> &'static str {
        match self {
            Label::Package => "Package",
            Label::Description => "Description",
            Label::GitRepository => "Git Repository",
            Label::License => "License",
            Label::Title => "Title",
            Label::Function => "Function",
            Label::CalledWith => "CalledWith",
            Label::Example => "Example",
            Label::ExpectedOutput => "ExpectedOutput",
        }
    }

    /// Field title used in rendered Markdown.
    pub fn title(self) -> &'static str {
        match self {
            Label::CalledWith => "Called With",
            Label::ExpectedOutput => "Expected Output",
            other => other.token(),
        }
    }

    /// Match `line` against the labels in `labels`, in order.
    ///
    /// Returns the first label whose prefix the line starts with, together
    /// with the text after the prefix.
    pub fn match_line<'a>(line: &'a str, labels: &[Label]) -> Option<(Label, &'a str)> {
        let rest = line.strip_prefix(MARKER)?;
        labels.iter().find_map(|&label| {
            rest.strip_prefix(label.token())
                .and_then(|r| r.strip_prefix(':'))
                .map(|value| (label, value))
        })
    }
}

/// Extracted values for one doc block.
///
/// Lookups for labels that never matched return the empty string.
#[derive(Debug, Default)]
pub struct TagSet {
    values: Vec<(Label, String)>,
}

impl TagSet {
    pub fn get(&self, label: Label) -> &str {
        self.values
            .iter()
            .find(|(l, _)| *l == label)
            .map_or("", |(_, v)| v.as_str())
    }

    fn set(&mut self, label: Label, value: &str) {
        match self.values.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value.to_string(),
            None => self.values.push((label, value.to_string())),
        }
    }
}

/// Result of scanning a doc block.
#[derive(Debug, Default)]
pub struct Extraction {
    pub tags: TagSet,
    /// Lines that matched no label, verbatim and in order.
    pub residual: Vec<String>,
}

/// Scan every line of `doc` for the labels in `labels`.
///
/// A later line with the same label overwrites an earlier one.
pub fn extract(doc: &DocBlock, labels: &[Label]) -> Extraction {
    let mut extraction = Extraction::default();
    for line in doc.lines() {
        match Label::match_line(line, labels) {
            Some((label, value)) => extraction.tags.set(label, value),
            None => extraction.residual.push(line.clone()),
        }
    }
    extraction
}
