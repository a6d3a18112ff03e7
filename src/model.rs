//! Data model for a parsed Go source file, independent of the renderer.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Text after `//` that marks a compiler directive rather than documentation.
static RE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:line |extern |export |[a-z0-9]+:[a-z0-9])").unwrap());

/// Whether the text after `//` is a compiler directive.
pub fn is_directive(body: &str) -> bool {
    RE_DIRECTIVE.is_match(body)
}

/// Raw bytes read from one input, before normalization.
#[derive(Debug)]
pub struct SourceText {
    /// File path, or `<stdin>` for the stream input.
    pub origin: String,
    pub bytes: Vec<u8>,
}

/// Complete parsed declaration tree of a single source file.
#[derive(Debug, Default)]
pub struct SourceFile {
    pub origin: String,
    pub package: Package,
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// The package clause and the doc block directly above it.
#[derive(Debug, Default)]
pub struct Package {
    pub name: String,
    pub doc: Option<DocBlock>,
}

#[derive(Debug)]
pub enum Declaration {
    Function(FunctionDecl),
    Type(TypeDecl),
    Value(ValueDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(f) => &f.name,
            Declaration::Type(t) => &t.name,
            Declaration::Value(v) => &v.name,
        }
    }

    pub fn doc(&self) -> Option<&DocBlock> {
        match self {
            Declaration::Function(f) => f.doc.as_ref(),
            Declaration::Type(t) => t.doc.as_ref(),
            Declaration::Value(v) => v.doc.as_ref(),
        }
    }
}

/// A function or method. Methods are named without their receiver.
#[derive(Debug)]
pub struct FunctionDecl {
    pub name: String,
    pub doc: Option<DocBlock>,
}

/// A type definition or alias.
#[derive(Debug)]
pub struct TypeDecl {
    pub name: String,
    pub doc: Option<DocBlock>,
}

/// One name bound by a `const` or `var` spec.
#[derive(Debug)]
pub struct ValueDecl {
    pub name: String,
    pub kind: StorageKind,
    pub doc: Option<DocBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Const,
    Var,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Const => f.write_str("const"),
            StorageKind::Var => f.write_str("var"),
        }
    }
}

/// Comment group immediately preceding a declaration.
///
/// Each entry is the raw text of one comment, marker included
/// (`// ...` or `/* ... */`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    lines: Vec<String>,
}

impl DocBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Comment text without markers.
    ///
    /// Directive comments are dropped, trailing whitespace is stripped,
    /// leading and trailing blank lines are removed and interior runs of
    /// blank lines collapse to one. A non-empty result ends with a newline.
    pub fn text(&self) -> String {
        let mut raw: Vec<&str> = Vec::new();
        for comment in &self.lines {
            if let Some(body) = comment.strip_prefix("//") {
                if is_directive(body) {
                    continue;
                }
                raw.push(body.strip_prefix(' ').unwrap_or(body));
            } else if let Some(body) = comment.strip_prefix("/*") {
                let body = body.strip_suffix("*/").unwrap_or(body);
                raw.extend(body.split('\n'));
            } else {
                raw.push(comment);
            }
        }

        let mut lines: Vec<&str> = Vec::with_capacity(raw.len());
        for line in raw.iter().flat_map(|chunk| chunk.split('\n')) {
            let line = line.trim_end_matches([' ', '\t', '\n', '\r']);
            let previous_blank = lines.last().map_or(true, |l: &&str| l.is_empty());
            if !line.is_empty() || !previous_blank {
                lines.push(line);
            }
        }
        if lines.last().is_some_and(|l| !l.is_empty()) {
            lines.push("");
        }
        lines.join("\n")
    }
}
